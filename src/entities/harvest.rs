//! Harvest entity - a weighed delivery by one employee on one day.
//!
//! `pay_rate` is captured when the harvest is entered and is never recomputed,
//! so later settings changes do not alter past earnings.

use super::employee::Crop;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Harvest database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "harvests")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employee who harvested
    pub employee_id: i64,
    /// Harvest day
    pub date: Date,
    /// Weight in kilograms
    pub weight: f64,
    /// Currency per kilogram, frozen at entry time
    pub pay_rate: i64,
    /// Crop harvested, copied from the employee at entry time
    pub crop: Crop,
}

impl Model {
    /// Worker earnings for this harvest, unrounded.
    #[must_use]
    pub fn earnings(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let rate = self.pay_rate as f64;
        self.weight * rate
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
