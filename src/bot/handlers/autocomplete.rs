//! Autocomplete handlers for Discord slash command parameters.
//!
//! Names are matched case-insensitively anywhere in the string and returned as
//! stored, so the selected value resolves exactly in the command.

use crate::{
    bot::BotData,
    core::{employee, entrepreneur},
    errors::Error,
};

/// Discord shows at most this many suggestions
const AUTOCOMPLETE_LIMIT: usize = 25;

fn matching_names(names: impl Iterator<Item = String>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    names
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .take(AUTOCOMPLETE_LIMIT)
        .collect()
}

/// Suggests names of every employee, resigned ones included.
pub async fn autocomplete_employee_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(employees) = employee::get_all_employees(&ctx.data().database).await else {
        return Vec::new();
    };
    matching_names(employees.into_iter().map(|e| e.name), partial)
}

/// Suggests names of employees who can receive new harvests and tasks.
pub async fn autocomplete_active_employee_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(employees) = employee::get_active_employees(&ctx.data().database).await else {
        return Vec::new();
    };
    matching_names(employees.into_iter().map(|e| e.name), partial)
}

/// Suggests entrepreneur names.
pub async fn autocomplete_entrepreneur_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(entrepreneurs) = entrepreneur::get_all_entrepreneurs(&ctx.data().database).await else {
        return Vec::new();
    };
    matching_names(entrepreneurs.into_iter().map(|e| e.name), partial)
}
