//! Entrepreneur entity - an external contractor or supplier.
//! Expenses attributed to an entrepreneur are plantation operating costs and
//! never reduce a worker's balance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Entrepreneur database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entrepreneurs")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Company or person name
    pub name: String,
    /// What they supply (e.g. "Fertilizer", "Transport")
    pub specialty: Option<String>,
    /// Optional phone number
    pub phone: Option<String>,
    /// Hex color used to tag the entrepreneur's records
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
