//! Core business logic - framework-agnostic ledger, record store and access rules
//!
//! Nothing here knows about Discord. Pure computations live in `ledger`,
//! `journal`, `dashboard` and `report`; the remaining modules read and write
//! the record store.

/// Permission checks and role resolution
pub mod access;
/// Salary advances, expenses and balance settlement
pub mod advance;
/// Role-gated dashboard view
pub mod dashboard;
/// Employee registry
pub mod employee;
/// Entrepreneur registry
pub mod entrepreneur;
/// Harvest recording
pub mod harvest;
/// Per-employee and per-day activity views
pub mod journal;
/// Balance, summary and rate computations
pub mod ledger;
/// Rain log
pub mod rain;
/// Money and weight formatting
pub mod report;
/// Market settings
pub mod settings;
/// Snapshot loading
pub mod snapshot;
/// Input validation
pub mod validation;
/// Piece-work tasks
pub mod work_task;
