//! Activity journal - chronological views over a snapshot.
//!
//! These views back the employee detail screen (latest earnings and deductions)
//! and the daily log (everything recorded on one calendar day, rain included).

use crate::{
    core::ledger::round_currency,
    entities::{harvest, rain_event, work_task},
    models::{Advance, LedgerSnapshot},
};
use chrono::{Datelike, NaiveDate};

/// What produced an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Harvest earnings
    Harvest,
    /// Piece-work earnings
    Task,
    /// Payment received
    Advance,
}

/// One line of an employee's history with its effect on the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    /// Day of the record
    pub date: NaiveDate,
    /// Source collection
    pub kind: ActivityKind,
    /// Signed effect on the balance (earnings positive, advances negative)
    pub amount: i64,
    /// Short human-readable description
    pub label: String,
}

/// Latest activity for one employee, newest first, at most `limit` entries.
///
/// Entries sharing a date keep the order harvests, tasks, advances.
#[must_use]
pub fn employee_activity(
    employee_id: i64,
    harvests: &[harvest::Model],
    work_tasks: &[work_task::Model],
    advances: &[Advance],
    limit: usize,
) -> Vec<ActivityEntry> {
    let harvest_entries = harvests
        .iter()
        .filter(|h| h.employee_id == employee_id)
        .map(|h| ActivityEntry {
            date: h.date,
            kind: ActivityKind::Harvest,
            amount: round_currency(h.earnings()),
            label: format!("{} kg {} @ {}", h.weight, h.crop.label(), h.pay_rate),
        });

    let task_entries = work_tasks
        .iter()
        .filter(|t| t.employee_id == employee_id)
        .map(|t| ActivityEntry {
            date: t.date,
            kind: ActivityKind::Task,
            amount: t.amount,
            label: t.description.clone(),
        });

    let advance_entries = advances
        .iter()
        .filter(|a| a.is_for_employee(employee_id))
        .map(|a| ActivityEntry {
            date: a.date,
            kind: ActivityKind::Advance,
            amount: -a.amount,
            label: a
                .notes
                .clone()
                .unwrap_or_else(|| a.category.label().to_string()),
        });

    let mut entries: Vec<ActivityEntry> = harvest_entries
        .chain(task_entries)
        .chain(advance_entries)
        .collect();
    // Stable sort keeps the source order for equal dates
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}

/// Everything recorded on one day.
#[derive(Debug, Clone, Default)]
pub struct DayJournal<'a> {
    /// Harvests of the day
    pub harvests: Vec<&'a harvest::Model>,
    /// Work tasks of the day
    pub work_tasks: Vec<&'a work_task::Model>,
    /// Payments of the day, to employees and entrepreneurs
    pub advances: Vec<&'a Advance>,
    /// Rain logged that day
    pub rain_events: Vec<&'a rain_event::Model>,
}

impl DayJournal<'_> {
    /// True when nothing was recorded that day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.harvests.is_empty()
            && self.work_tasks.is_empty()
            && self.advances.is_empty()
            && self.rain_events.is_empty()
    }
}

/// Collects the records of `date` from a snapshot.
#[must_use]
pub fn day_journal(date: NaiveDate, snapshot: &LedgerSnapshot) -> DayJournal<'_> {
    DayJournal {
        harvests: snapshot.harvests.iter().filter(|h| h.date == date).collect(),
        work_tasks: snapshot.work_tasks.iter().filter(|t| t.date == date).collect(),
        advances: snapshot.advances.iter().filter(|a| a.date == date).collect(),
        rain_events: snapshot
            .rain_events
            .iter()
            .filter(|r| r.date == date)
            .collect(),
    }
}

/// Record counts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    /// The day
    pub date: NaiveDate,
    /// Number of harvests
    pub harvests: usize,
    /// Number of work tasks
    pub work_tasks: usize,
    /// Number of payments
    pub advances: usize,
    /// Whether any rain was logged
    pub rained: bool,
}

/// Per-day record counts for every day of a month that has any activity.
///
/// Returns an empty list for an invalid year/month.
#[must_use]
pub fn month_activity(year: i32, month: u32, snapshot: &LedgerSnapshot) -> Vec<DayActivity> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter_map(|date| {
            let journal = day_journal(date, snapshot);
            (!journal.is_empty()).then(|| DayActivity {
                date,
                harvests: journal.harvests.len(),
                work_tasks: journal.work_tasks.len(),
                advances: journal.advances.len(),
                rained: !journal.rain_events.is_empty(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        entities::{Crop, ExpenseCategory, RainIntensity, RainPeriod},
        models::Beneficiary,
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn snapshot() -> LedgerSnapshot {
        LedgerSnapshot {
            harvests: vec![
                harvest::Model {
                    id: 1,
                    employee_id: 1,
                    date: day(5),
                    weight: 40.0,
                    pay_rate: 75,
                    crop: Crop::Hevea,
                },
                harvest::Model {
                    id: 2,
                    employee_id: 2,
                    date: day(3),
                    weight: 10.0,
                    pay_rate: 933,
                    crop: Crop::Cacao,
                },
            ],
            work_tasks: vec![work_task::Model {
                id: 1,
                employee_id: 1,
                date: day(5),
                description: "Tapping panel repair".to_string(),
                amount: 1500,
            }],
            advances: vec![
                Advance {
                    id: 1,
                    beneficiary: Beneficiary::Employee(1),
                    date: day(7),
                    amount: 2000,
                    category: ExpenseCategory::Advance,
                    payment_method: None,
                    notes: None,
                },
                Advance {
                    id: 2,
                    beneficiary: Beneficiary::Entrepreneur(1),
                    date: day(3),
                    amount: 45000,
                    category: ExpenseCategory::Fertilizer,
                    payment_method: None,
                    notes: Some("NPK 15-15-15".to_string()),
                },
            ],
            rain_events: vec![rain_event::Model {
                id: 1,
                date: day(4),
                intensity: RainIntensity::Heavy,
                period: RainPeriod::Night,
            }],
            ..LedgerSnapshot::default()
        }
    }

    #[test]
    fn test_employee_activity_newest_first_with_signs() {
        let snap = snapshot();
        let entries = employee_activity(1, &snap.harvests, &snap.work_tasks, &snap.advances, 10);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, ActivityKind::Advance);
        assert_eq!(entries[0].amount, -2000);
        assert_eq!(entries[0].label, "Salary advance");
        // Same day: harvest before task
        assert_eq!(entries[1].kind, ActivityKind::Harvest);
        assert_eq!(entries[1].amount, 3000);
        assert_eq!(entries[2].kind, ActivityKind::Task);
        assert_eq!(entries[2].amount, 1500);
    }

    #[test]
    fn test_employee_activity_respects_limit() {
        let snap = snapshot();
        let entries = employee_activity(1, &snap.harvests, &snap.work_tasks, &snap.advances, 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, day(7));
    }

    #[test]
    fn test_day_journal_collects_all_collections() {
        let snap = snapshot();

        let journal = day_journal(day(3), &snap);
        assert_eq!(journal.harvests.len(), 1);
        assert_eq!(journal.advances.len(), 1);
        assert!(journal.work_tasks.is_empty());
        assert!(journal.rain_events.is_empty());

        let rainy = day_journal(day(4), &snap);
        assert_eq!(rainy.rain_events.len(), 1);

        assert!(day_journal(day(20), &snap).is_empty());
    }

    #[test]
    fn test_month_activity_lists_only_active_days() {
        let snap = snapshot();
        let days = month_activity(2024, 3, &snap);

        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(3), day(4), day(5), day(7)]);

        let fifth = days.iter().find(|d| d.date == day(5)).unwrap();
        assert_eq!(fifth.harvests, 1);
        assert_eq!(fifth.work_tasks, 1);
        assert!(!fifth.rained);

        assert!(month_activity(2024, 13, &snap).is_empty());
        assert!(month_activity(2024, 4, &snap).is_empty());
    }
}
