//! Settings entity - the single row of market settings (id = 1).
//!
//! These values only drive the rate *proposed* for a new harvest and the
//! present-day revenue valuation; they never rewrite a stored `pay_rate`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Primary key of the one and only settings row
pub const SETTINGS_ROW_ID: i32 = 1;

/// Market settings database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Always [`SETTINGS_ROW_ID`]
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Fixed hevea tariff paid to workers, per kg
    pub pay_rate_hevea: i64,
    /// Legacy cacao tariff, kept for compatibility and otherwise unused
    pub pay_rate_cacao: i64,
    /// Hevea selling price, per kg
    pub market_price_hevea: i64,
    /// Cacao selling price, per kg
    pub market_price_cacao: i64,
    /// Share of the cacao market price paid to workers
    pub cacao_pay_ratio: f64,
    /// When the settings were last changed
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
