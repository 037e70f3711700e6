//! Employee entity - a payroll subject assigned to exactly one crop.
//!
//! Status only decides whether the employee can receive *new* harvests and tasks;
//! records already attached to a resigned employee keep counting in the ledger.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plantation crop. Hevea is paid at a fixed tariff, cacao at a share of market price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum Crop {
    /// Rubber tree
    #[sea_orm(string_value = "HEVEA")]
    Hevea,
    /// Cocoa
    #[sea_orm(string_value = "CACAO")]
    Cacao,
}

impl Crop {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hevea => "Hevea",
            Self::Cacao => "Cacao",
        }
    }
}

/// Employment status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    /// Currently working; selectable for new harvests and tasks
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    /// Left the plantation; history is preserved
    #[sea_orm(string_value = "RESIGNED")]
    Resigned,
}

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// ACTIVE or RESIGNED
    pub status: EmployeeStatus,
    /// Crop the employee harvests
    pub crop: Crop,
    /// Hex color used to tag the employee's records
    pub color: String,
    /// Icon identifier for presentation
    pub icon_name: String,
    /// When the employee was added
    pub created_at: DateTimeUtc,
    /// Optional phone number
    pub phone: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Model {
    /// Whether new harvests and tasks may be recorded for this employee.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Employees are referenced by id from harvests, tasks and advances, without foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
