//! Work task entity - a flat piece-work payment to one employee.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Work task database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_tasks")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employee who did the work
    pub employee_id: i64,
    /// Day the work was done
    pub date: Date,
    /// What was done (e.g. "Weeding plot 3")
    pub description: String,
    /// Amount owed for the task
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
