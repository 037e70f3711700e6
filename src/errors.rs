//! Unified error type for the ledger, the record store and the Discord layer.

use thiserror::Error;

/// Every failure the application can surface.
///
/// Validation variants are raised before a record reaches a collection, so the
/// ledger itself never sees a value it cannot sum.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// The record store is unreachable or rejected a statement
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A monetary amount was zero, negative or implausibly large
    #[error("Invalid amount: {amount} (must be greater than zero and at most {max})", max = crate::core::validation::MAX_AMOUNT)]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// A harvest weight was not a positive, finite, plausible number of kilograms
    #[error("Invalid weight: {weight} kg (must be greater than zero and at most {max} kg)", max = crate::core::validation::MAX_WEIGHT_KG)]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// A pay rate or market price was negative or implausibly large
    #[error("Invalid rate: {rate} (must be between 0 and {max})", max = crate::core::validation::MAX_RATE)]
    InvalidPayRate {
        /// The rejected rate
        rate: i64,
    },

    /// The cacao pay ratio fell outside (0, 1]
    #[error("Invalid cacao pay ratio: {ratio} (must be greater than 0 and at most 1)")]
    InvalidPayRatio {
        /// The rejected ratio
        ratio: f64,
    },

    /// A date string was not `YYYY-MM-DD`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// A required text field was blank
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Field label
        field: String,
    },

    /// Another record of the registry already uses this name
    #[error("{kind} '{name}' already exists")]
    DuplicateName {
        /// Registry, e.g. "Employee"
        kind: &'static str,
        /// The conflicting name
        name: String,
    },

    /// No employee matches the reference
    #[error("Employee '{name}' not found")]
    EmployeeNotFound {
        /// Name or id that failed to resolve
        name: String,
    },

    /// No entrepreneur matches the reference
    #[error("Entrepreneur '{name}' not found")]
    EntrepreneurNotFound {
        /// Name or id that failed to resolve
        name: String,
    },

    /// The employee has resigned and cannot receive new harvests or tasks
    #[error("Employee '{name}' has resigned")]
    EmployeeInactive {
        /// Employee name
        name: String,
    },

    /// An expense names neither an employee nor an entrepreneur
    #[error("An expense must be attributed to an employee or an entrepreneur")]
    MissingBeneficiary,

    /// An expense names both an employee and an entrepreneur
    #[error("An expense cannot be attributed to both an employee and an entrepreneur")]
    AmbiguousBeneficiary,

    /// A stored row cannot be turned into a ledger record
    #[error("Corrupt {collection} record {id}: {reason}")]
    CorruptRecord {
        /// Collection the row belongs to
        collection: &'static str,
        /// Row id
        id: i64,
        /// What is wrong with it
        reason: String,
    },

    /// Settlement requested for an employee who is owed nothing
    #[error("Nothing is due to '{name}' (balance {balance})")]
    NothingDue {
        /// Employee name
        name: String,
        /// Current signed balance
        balance: i64,
    },

    /// The caller's role does not allow the action
    #[error("Permission denied: {action} requires {required}")]
    PermissionDenied {
        /// What was attempted
        action: String,
        /// Role description needed for it
        required: String,
    },

    /// The caller has no profile and is not a bootstrap administrator
    #[error("Unknown user {user_id}: ask an administrator to assign you a role")]
    UnknownUser {
        /// Identity-provider user id
        user_id: String,
    },

    /// I/O failure (configuration file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable is missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Writing a response message failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

impl Error {
    /// True for failures of the backing store, which the user can simply retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
