//! Advance entity - every outgoing payment, whether a salary advance to an
//! employee or a purchase from an entrepreneur.
//!
//! The row stores the beneficiary as two nullable columns; exactly one must be
//! set. [`crate::models::Advance`] is the checked view the ledger works with.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// What the money was spent on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Salary advance or settlement
    #[sea_orm(string_value = "ADVANCE")]
    Advance,
    /// Fertilizer and crop products
    #[sea_orm(string_value = "FERTILIZER")]
    Fertilizer,
    /// Tools and equipment
    #[sea_orm(string_value = "EQUIPMENT")]
    Equipment,
    /// Transport
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
    /// One-off contracted work
    #[sea_orm(string_value = "EXCEPTIONAL_WORK")]
    ExceptionalWork,
    /// Anything else
    #[sea_orm(string_value = "MISC")]
    Misc,
}

impl ExpenseCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Advance => "Salary advance",
            Self::Fertilizer => "Fertilizer / products",
            Self::Equipment => "Equipment",
            Self::Transport => "Transport",
            Self::ExceptionalWork => "Exceptional work",
            Self::Misc => "Miscellaneous",
        }
    }
}

/// How the payment was made
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Cash in hand
    #[sea_orm(string_value = "CASH")]
    Cash,
    /// Bank or mobile-money transfer
    #[sea_orm(string_value = "TRANSFER")]
    Transfer,
}

/// Advance database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advances")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Set when the payment went to an employee
    pub employee_id: Option<i64>,
    /// Set when the payment went to an entrepreneur
    pub entrepreneur_id: Option<i64>,
    /// Payment day
    pub date: Date,
    /// Amount paid
    pub amount: i64,
    /// Spending category
    pub category: ExpenseCategory,
    /// Cash or transfer, when known
    pub payment_method: Option<PaymentMethod>,
    /// Free-form notes
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
