//! Text formatting for money, weights and ledger entries.
//!
//! Framework-agnostic helpers used by the bot layer. Core figures stay signed;
//! turning a non-positive balance into "Settled" only happens here.

use crate::core::journal::{ActivityEntry, ActivityKind};

/// Currency suffix (CFA franc)
pub const CURRENCY_SUFFIX: &str = "F";

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount like `12 345 F`.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{sign}{} {CURRENCY_SUFFIX}",
        group_thousands(amount.unsigned_abs())
    )
}

/// Formats an amount with an explicit sign, like `+7 500 F` or `-4 000 F`.
#[must_use]
pub fn format_signed_currency(amount: i64) -> String {
    if amount >= 0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

/// Formats an employee balance. Zero or negative balances read "Settled".
#[must_use]
pub fn format_balance(balance: i64) -> String {
    if balance <= 0 {
        "Settled".to_string()
    } else {
        format_currency(balance)
    }
}

/// Formats a weight in kilograms, dropping the decimal for whole numbers.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        // Whole number well inside the u64 range
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = weight.abs() as u64;
        let sign = if weight < 0.0 { "-" } else { "" };
        format!("{sign}{} kg", group_thousands(whole))
    } else {
        format!("{weight:.1} kg")
    }
}

/// Share of `part` in `total` as a percentage. Zero when the total is zero.
#[must_use]
pub fn calculate_share(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    (part / total) * 100.0
}

/// Generates a text bar like `[████████░░] 80.0%`.
#[must_use]
pub fn format_share_bar(percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percent.clamp(0.0, 100.0);

    // clamped is within [0, 100] and length is small
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!("[{}{}] {percent:.1}%", "█".repeat(filled), "░".repeat(empty))
}

/// One line of an employee's activity history.
#[must_use]
pub fn format_activity_entry(entry: &ActivityEntry) -> String {
    let kind = match entry.kind {
        ActivityKind::Harvest => "Harvest",
        ActivityKind::Task => "Task",
        ActivityKind::Advance => "Advance",
    };
    format!(
        "{} | {} | {kind} | {}",
        entry.date,
        format_signed_currency(entry.amount),
        entry.label
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "0 F");
        assert_eq!(format_currency(933), "933 F");
        assert_eq!(format_currency(12_345), "12 345 F");
        assert_eq!(format_currency(1_234_567), "1 234 567 F");
        assert_eq!(format_currency(-28_500), "-28 500 F");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(7500), "+7 500 F");
        assert_eq!(format_signed_currency(-4000), "-4 000 F");
    }

    #[test]
    fn test_format_balance_settled() {
        assert_eq!(format_balance(0), "Settled");
        assert_eq!(format_balance(-150), "Settled");
        assert_eq!(format_balance(5500), "5 500 F");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(100.0), "100 kg");
        assert_eq!(format_weight(1500.0), "1 500 kg");
        assert_eq!(format_weight(12.34), "12.3 kg");
    }

    #[test]
    fn test_calculate_share() {
        assert_eq!(calculate_share(25.0, 100.0), 25.0);
        assert_eq!(calculate_share(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_share_bar() {
        assert_eq!(format_share_bar(100.0, Some(10)), "[██████████] 100.0%");
        assert_eq!(format_share_bar(50.0, Some(10)), "[█████░░░░░] 50.0%");
        assert_eq!(format_share_bar(0.0, None), "[░░░░░░░░░░] 0.0%");
    }

    #[test]
    fn test_format_activity_entry() {
        let entry = ActivityEntry {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            kind: ActivityKind::Advance,
            amount: -4000,
            label: "Salary advance".to_string(),
        };
        assert_eq!(
            format_activity_entry(&entry),
            "2024-06-03 | -4 000 F | Advance | Salary advance"
        );
    }
}
