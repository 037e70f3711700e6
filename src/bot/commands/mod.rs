//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Dashboard and rate proposal
pub mod dashboard;

/// Harvest, task, expense, settlement and rain entries
pub mod entries;

/// General utility commands
pub mod general;

/// Day journal and month overview
pub mod journal;

/// Record deletion and role assignment
pub mod manage;

/// Market settings
pub mod settings;

/// Employee and entrepreneur registry
pub mod team;

use crate::{bot::BotData, errors::Error};

// Export commands
pub use dashboard::*;
pub use entries::*;
pub use general::*;
pub use journal::*;
pub use manage::*;
pub use settings::*;
pub use team::*;

/// Every slash command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        ping(),
        help(),
        dashboard(),
        propose_rate(),
        harvest(),
        task(),
        expense(),
        settle(),
        rain(),
        employees(),
        employee_info(),
        add_employee(),
        update_employee(),
        set_status(),
        entrepreneurs(),
        add_entrepreneur(),
        journal(),
        settings(),
        update_settings(),
        delete_record(),
        set_role(),
    ]
}
