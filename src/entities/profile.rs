//! Profile entity - maps an identity-provider user id to an application role.
//!
//! WORKER profiles point at the employee record whose balance they may see.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application role, from most to least privileged
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access, including profit, settings and deletion
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    /// Records data and sees payroll, but not profit
    #[sea_orm(string_value = "MANAGER")]
    Manager,
    /// Sees only their own balance and activity
    #[sea_orm(string_value = "WORKER")]
    Worker,
}

/// Profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user id of the account holder
    #[sea_orm(unique)]
    pub user_id: String,
    /// Role granted to the user
    pub role: Role,
    /// Linked employee, for WORKER profiles
    pub employee_id: Option<i64>,
    /// When the profile was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
