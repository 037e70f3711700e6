//! Domain records consumed by the ledger.
//!
//! Harvests, work tasks, employees and rain events are used as stored. Advances
//! and settings get a checked view here: an advance's beneficiary becomes a
//! tagged variant, and settings are a plain value passed into every computation.

use crate::{
    core::validation::validate_pay_rate,
    entities::{
        ExpenseCategory, PaymentMethod, advance, employee, entrepreneur, harvest, rain_event,
        settings, work_task,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who received an outgoing payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beneficiary {
    /// A payroll worker; reduces that worker's balance
    Employee(i64),
    /// An external supplier; counts as an operating expense
    Entrepreneur(i64),
}

impl Beneficiary {
    /// Builds a beneficiary from the two nullable storage columns.
    ///
    /// # Errors
    /// `MissingBeneficiary` when neither is set, `AmbiguousBeneficiary` when both are.
    pub fn from_columns(
        employee_id: Option<i64>,
        entrepreneur_id: Option<i64>,
    ) -> Result<Self> {
        match (employee_id, entrepreneur_id) {
            (Some(id), None) => Ok(Self::Employee(id)),
            (None, Some(id)) => Ok(Self::Entrepreneur(id)),
            (None, None) => Err(Error::MissingBeneficiary),
            (Some(_), Some(_)) => Err(Error::AmbiguousBeneficiary),
        }
    }

    /// Splits back into `(employee_id, entrepreneur_id)` columns.
    #[must_use]
    pub const fn into_columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            Self::Employee(id) => (Some(id), None),
            Self::Entrepreneur(id) => (None, Some(id)),
        }
    }

    /// Employee id when the payment went to a worker.
    #[must_use]
    pub const fn employee_id(self) -> Option<i64> {
        match self {
            Self::Employee(id) => Some(id),
            Self::Entrepreneur(_) => None,
        }
    }
}

/// An outgoing payment with a checked beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Row id
    pub id: i64,
    /// Employee or entrepreneur paid
    pub beneficiary: Beneficiary,
    /// Payment day
    pub date: NaiveDate,
    /// Amount paid
    pub amount: i64,
    /// Spending category
    pub category: ExpenseCategory,
    /// Cash or transfer
    pub payment_method: Option<PaymentMethod>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Advance {
    /// True when this payment was made to the given employee.
    #[must_use]
    pub fn is_for_employee(&self, employee_id: i64) -> bool {
        self.beneficiary == Beneficiary::Employee(employee_id)
    }
}

impl TryFrom<advance::Model> for Advance {
    type Error = Error;

    fn try_from(row: advance::Model) -> Result<Self> {
        let beneficiary = Beneficiary::from_columns(row.employee_id, row.entrepreneur_id)
            .map_err(|e| Error::CorruptRecord {
                collection: "advances",
                id: row.id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: row.id,
            beneficiary,
            date: row.date,
            amount: row.amount,
            category: row.category,
            payment_method: row.payment_method,
            notes: row.notes,
        })
    }
}

/// Market prices and worker tariffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSettings {
    /// Fixed hevea tariff per kg
    pub pay_rate_hevea: i64,
    /// Legacy, unused
    pub pay_rate_cacao: i64,
    /// Hevea market price per kg
    pub market_price_hevea: i64,
    /// Cacao market price per kg
    pub market_price_cacao: i64,
    /// Share of the cacao market price paid to workers, in (0, 1]
    pub cacao_pay_ratio: f64,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            pay_rate_hevea: 75,
            pay_rate_cacao: 0,
            market_price_hevea: 360,
            market_price_cacao: 2800,
            cacao_pay_ratio: 0.3333,
        }
    }
}

impl MarketSettings {
    /// Checks that every value can be used in a computation.
    ///
    /// # Errors
    /// `InvalidPayRate` for a negative or oversized tariff or price, `InvalidPayRatio` for a ratio outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        for rate in [
            self.pay_rate_hevea,
            self.pay_rate_cacao,
            self.market_price_hevea,
            self.market_price_cacao,
        ] {
            validate_pay_rate(rate)?;
        }

        let ratio = self.cacao_pay_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(Error::InvalidPayRatio { ratio });
        }

        Ok(())
    }
}

impl From<settings::Model> for MarketSettings {
    fn from(row: settings::Model) -> Self {
        Self {
            pay_rate_hevea: row.pay_rate_hevea,
            pay_rate_cacao: row.pay_rate_cacao,
            market_price_hevea: row.market_price_hevea,
            market_price_cacao: row.market_price_cacao,
            cacao_pay_ratio: row.cacao_pay_ratio,
        }
    }
}

/// Every collection at one point in time. The ledger only ever reads one of these.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    /// Employees, ordered by name
    pub employees: Vec<employee::Model>,
    /// Entrepreneurs, ordered by name
    pub entrepreneurs: Vec<entrepreneur::Model>,
    /// Harvests, newest first
    pub harvests: Vec<harvest::Model>,
    /// Work tasks, newest first
    pub work_tasks: Vec<work_task::Model>,
    /// Advances and expenses, newest first
    pub advances: Vec<Advance>,
    /// Rain log, newest first
    pub rain_events: Vec<rain_event::Model>,
    /// Current market settings
    pub settings: MarketSettings,
}

impl LedgerSnapshot {
    /// Looks up an employee by id.
    #[must_use]
    pub fn employee(&self, id: i64) -> Option<&employee::Model> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up an entrepreneur by id.
    #[must_use]
    pub fn entrepreneur(&self, id: i64) -> Option<&entrepreneur::Model> {
        self.entrepreneurs.iter().find(|e| e.id == id)
    }

    /// Name of the beneficiary, or "Unknown" when the id no longer resolves.
    #[must_use]
    pub fn beneficiary_name(&self, beneficiary: Beneficiary) -> &str {
        match beneficiary {
            Beneficiary::Employee(id) => self.employee(id).map(|e| e.name.as_str()),
            Beneficiary::Entrepreneur(id) => self.entrepreneur(id).map(|e| e.name.as_str()),
        }
        .unwrap_or("Unknown")
    }

    /// Name of an employee, or "Unknown" when the id no longer resolves.
    #[must_use]
    pub fn employee_name(&self, id: i64) -> &str {
        self.employee(id).map_or("Unknown", |e| e.name.as_str())
    }
}
