//! Ledger aggregation - balances owed to workers and plantation-wide figures.
//!
//! Every function here is pure: it takes whole collections and returns a value,
//! with no I/O and no hidden state. Products of weight and rate are summed as
//! `f64` and each named aggregate is rounded exactly once, half away from zero.
//!
//! Two kinds of price meet here and must not be confused:
//! - a harvest's `pay_rate` is frozen when the harvest is entered;
//! - market prices come from the [`MarketSettings`] passed in, i.e. today's valuation.

use crate::{
    entities::{Crop, employee, harvest, work_task},
    models::{Advance, Beneficiary, MarketSettings},
};
use serde::Serialize;

/// Plantation-wide financial figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlantationSummary {
    /// Harvest pay plus task pay, over every record
    pub gross_worker_pay: i64,
    /// Advances paid to employees
    pub already_paid_to_workers: i64,
    /// Payments to entrepreneurs
    pub external_expenses: i64,
    /// Harvest weight valued at current market prices
    pub gross_revenue: i64,
    /// `gross_revenue - gross_worker_pay - external_expenses`
    pub profit: i64,
    /// `gross_worker_pay - already_paid_to_workers`
    pub net_due_to_workers: i64,
}

/// An employee with a strictly positive balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueBalance<'a> {
    /// The employee owed money
    pub employee: &'a employee::Model,
    /// Amount owed, always > 0
    pub due: i64,
}

/// Total kilograms harvested for one crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropVolume {
    /// Crop
    pub crop: Crop,
    /// Kilograms
    pub weight: f64,
}

/// Rounds a monetary aggregate to the nearest currency unit.
#[must_use]
pub fn round_currency(value: f64) -> i64 {
    // Aggregates of a farm ledger stay far inside i64 range; `as` saturates otherwise.
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    rounded
}

#[allow(clippy::cast_precision_loss)]
const fn as_f64(amount: i64) -> f64 {
    amount as f64
}

fn harvest_pay(harvests: &[harvest::Model], employee_id: Option<i64>) -> f64 {
    harvests
        .iter()
        .filter(|h| employee_id.is_none_or(|id| h.employee_id == id))
        .map(harvest::Model::earnings)
        .sum()
}

fn task_pay(work_tasks: &[work_task::Model], employee_id: Option<i64>) -> f64 {
    work_tasks
        .iter()
        .filter(|t| employee_id.is_none_or(|id| t.employee_id == id))
        .map(|t| as_f64(t.amount))
        .sum()
}

/// Current balance owed to one employee.
///
/// Harvest pay and task pay for the employee, minus every advance paid to them.
/// Positive means the plantation owes the worker; zero or negative means nothing
/// is due. An employee with no records has a balance of 0.
#[must_use]
pub fn compute_employee_balance(
    employee_id: i64,
    harvests: &[harvest::Model],
    work_tasks: &[work_task::Model],
    advances: &[Advance],
) -> i64 {
    let advanced: f64 = advances
        .iter()
        .filter(|a| a.is_for_employee(employee_id))
        .map(|a| as_f64(a.amount))
        .sum();

    round_currency(
        harvest_pay(harvests, Some(employee_id)) + task_pay(work_tasks, Some(employee_id))
            - advanced,
    )
}

/// Everything an employee has earned, before advances.
#[must_use]
pub fn compute_employee_earnings(
    employee_id: i64,
    harvests: &[harvest::Model],
    work_tasks: &[work_task::Model],
) -> i64 {
    round_currency(
        harvest_pay(harvests, Some(employee_id)) + task_pay(work_tasks, Some(employee_id)),
    )
}

/// Selling price per kilogram for a crop under the given settings.
#[must_use]
pub const fn market_price_for(crop: Crop, settings: &MarketSettings) -> i64 {
    match crop {
        Crop::Hevea => settings.market_price_hevea,
        Crop::Cacao => settings.market_price_cacao,
    }
}

/// Pay rate to suggest when a new harvest is entered for an employee.
///
/// Hevea workers get the fixed tariff; cacao workers get a share of the current
/// cacao market price. The operator may override the suggestion, and whatever
/// they submit is what gets stored.
#[must_use]
pub fn propose_harvest_rate(employee: &employee::Model, settings: &MarketSettings) -> i64 {
    propose_rate_for_crop(employee.crop, settings)
}

/// Same as [`propose_harvest_rate`], keyed by crop.
#[must_use]
pub fn propose_rate_for_crop(crop: Crop, settings: &MarketSettings) -> i64 {
    match crop {
        Crop::Hevea => settings.pay_rate_hevea,
        Crop::Cacao => round_currency(as_f64(settings.market_price_cacao) * settings.cacao_pay_ratio),
    }
}

/// Plantation totals over every record.
#[must_use]
pub fn compute_plantation_summary(
    harvests: &[harvest::Model],
    work_tasks: &[work_task::Model],
    advances: &[Advance],
    settings: &MarketSettings,
) -> PlantationSummary {
    let gross_worker_pay = round_currency(harvest_pay(harvests, None) + task_pay(work_tasks, None));

    let (to_workers, to_entrepreneurs): (f64, f64) =
        advances
            .iter()
            .fold((0.0, 0.0), |(workers, external), a| match a.beneficiary {
                Beneficiary::Employee(_) => (workers + as_f64(a.amount), external),
                Beneficiary::Entrepreneur(_) => (workers, external + as_f64(a.amount)),
            });
    let already_paid_to_workers = round_currency(to_workers);
    let external_expenses = round_currency(to_entrepreneurs);

    let gross_revenue = round_currency(
        harvests
            .iter()
            .map(|h| h.weight * as_f64(market_price_for(h.crop, settings)))
            .sum(),
    );

    PlantationSummary {
        gross_worker_pay,
        already_paid_to_workers,
        external_expenses,
        gross_revenue,
        profit: gross_revenue
            .saturating_sub(gross_worker_pay)
            .saturating_sub(external_expenses),
        net_due_to_workers: gross_worker_pay.saturating_sub(already_paid_to_workers),
    }
}

/// Employees who are owed money, in the order they were supplied.
#[must_use]
pub fn filter_due_employees<'a>(
    employees: &'a [employee::Model],
    harvests: &[harvest::Model],
    work_tasks: &[work_task::Model],
    advances: &[Advance],
) -> Vec<DueBalance<'a>> {
    employees
        .iter()
        .filter_map(|employee| {
            let due = compute_employee_balance(employee.id, harvests, work_tasks, advances);
            (due > 0).then_some(DueBalance { employee, due })
        })
        .collect()
}

/// Kilograms harvested per crop. Both crops are always present, hevea first.
#[must_use]
pub fn harvest_volume_by_crop(harvests: &[harvest::Model]) -> [CropVolume; 2] {
    [Crop::Hevea, Crop::Cacao].map(|crop| CropVolume {
        crop,
        weight: harvests
            .iter()
            .filter(|h| h.crop == crop)
            .map(|h| h.weight)
            .sum(),
    })
}

/// The first `limit` payments made to entrepreneurs, in input order.
#[must_use]
pub fn recent_external_expenses(advances: &[Advance], limit: usize) -> Vec<&Advance> {
    advances
        .iter()
        .filter(|a| matches!(a.beneficiary, Beneficiary::Entrepreneur(_)))
        .take(limit)
        .collect()
}
