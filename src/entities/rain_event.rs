//! Rain event entity - weather log entries. Purely informational.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How hard it rained
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum RainIntensity {
    /// Light rain
    #[sea_orm(string_value = "LIGHT")]
    Light,
    /// Moderate rain
    #[sea_orm(string_value = "MODERATE")]
    Moderate,
    /// Heavy rain
    #[sea_orm(string_value = "HEAVY")]
    Heavy,
}

/// Part of the day
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum RainPeriod {
    /// Morning
    #[sea_orm(string_value = "MORNING")]
    Morning,
    /// Afternoon
    #[sea_orm(string_value = "AFTERNOON")]
    Afternoon,
    /// Night
    #[sea_orm(string_value = "NIGHT")]
    Night,
}

/// Rain event database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rain_events")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day of the rain
    pub date: Date,
    /// Intensity
    pub intensity: RainIntensity,
    /// Period of the day
    pub period: RainPeriod,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
