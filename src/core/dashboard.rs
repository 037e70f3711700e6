//! Role-gated dashboard assembled from a [`LedgerSnapshot`].
//!
//! Structured data only; the bot layer renders it.

use crate::{
    core::{
        access::{Action, Caller},
        ledger::{
            CropVolume, compute_employee_balance, compute_plantation_summary,
            filter_due_employees, harvest_volume_by_crop, recent_external_expenses,
        },
    },
    entities::ExpenseCategory,
    models::LedgerSnapshot,
};
use chrono::NaiveDate;

/// Number of external expenses shown on the dashboard
pub const RECENT_EXPENSES_LIMIT: usize = 10;

/// The single figure shown first, chosen by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    /// A worker's own balance
    OwnBalance {
        /// Employee name, "Unknown" when the link is broken
        name: String,
        /// Signed balance
        due: i64,
    },
    /// Total earned by all workers
    GrossWorkerPay(i64),
    /// Plantation profit
    Profit(i64),
}

/// Payroll figures visible to managers and administrators.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollView {
    /// Harvest pay plus task pay
    pub gross_worker_pay: i64,
    /// Advances already paid to workers
    pub already_paid_to_workers: i64,
    /// Still owed to workers overall
    pub net_due_to_workers: i64,
    /// Paid to entrepreneurs
    pub external_expenses: i64,
    /// `(name, due)` for every employee with a positive balance
    pub due: Vec<(String, i64)>,
    /// Kilograms per crop
    pub volumes: [CropVolume; 2],
    /// Latest payments to entrepreneurs
    pub recent_expenses: Vec<ExpenseLine>,
}

/// One external expense on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLine {
    /// Payment day
    pub date: NaiveDate,
    /// Entrepreneur name
    pub beneficiary: String,
    /// Category
    pub category: ExpenseCategory,
    /// Amount paid
    pub amount: i64,
}

/// Revenue figures visible to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinanceView {
    /// Harvest weight at current market prices
    pub gross_revenue: i64,
    /// Revenue minus worker pay and external expenses
    pub profit: i64,
}

/// Everything the caller is allowed to see on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Figure shown first
    pub headline: Headline,
    /// Present for ADMIN and MANAGER
    pub payroll: Option<PayrollView>,
    /// Present for ADMIN only
    pub finances: Option<FinanceView>,
}

/// Builds the dashboard for a caller.
#[must_use]
pub fn build_dashboard(caller: &Caller, snapshot: &LedgerSnapshot) -> Dashboard {
    let summary = compute_plantation_summary(
        &snapshot.harvests,
        &snapshot.work_tasks,
        &snapshot.advances,
        &snapshot.settings,
    );

    let can_see_payroll = Action::ViewPayroll.allowed_for(caller.role);
    let can_see_profit = Action::ViewProfit.allowed_for(caller.role);

    let headline = if can_see_profit {
        Headline::Profit(summary.profit)
    } else if can_see_payroll {
        Headline::GrossWorkerPay(summary.gross_worker_pay)
    } else {
        let (name, due) = caller.employee_id.map_or_else(
            || ("Unknown".to_string(), 0),
            |id| {
                (
                    snapshot.employee_name(id).to_string(),
                    compute_employee_balance(
                        id,
                        &snapshot.harvests,
                        &snapshot.work_tasks,
                        &snapshot.advances,
                    ),
                )
            },
        );
        Headline::OwnBalance { name, due }
    };

    let payroll = can_see_payroll.then(|| PayrollView {
        gross_worker_pay: summary.gross_worker_pay,
        already_paid_to_workers: summary.already_paid_to_workers,
        net_due_to_workers: summary.net_due_to_workers,
        external_expenses: summary.external_expenses,
        due: filter_due_employees(
            &snapshot.employees,
            &snapshot.harvests,
            &snapshot.work_tasks,
            &snapshot.advances,
        )
        .into_iter()
        .map(|d| (d.employee.name.clone(), d.due))
        .collect(),
        volumes: harvest_volume_by_crop(&snapshot.harvests),
        recent_expenses: recent_external_expenses(&snapshot.advances, RECENT_EXPENSES_LIMIT)
            .into_iter()
            .map(|a| ExpenseLine {
                date: a.date,
                beneficiary: snapshot.beneficiary_name(a.beneficiary).to_string(),
                category: a.category,
                amount: a.amount,
            })
            .collect(),
    });

    let finances = can_see_profit.then_some(FinanceView {
        gross_revenue: summary.gross_revenue,
        profit: summary.profit,
    });

    Dashboard {
        headline,
        payroll,
        finances,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::snapshot::load_snapshot,
        entities::{Crop, Role},
        errors::Result,
        models::Beneficiary,
        test_utils::*,
    };

    fn caller(role: Role, employee_id: Option<i64>) -> Caller {
        Caller {
            user_id: "1".to_string(),
            role,
            employee_id,
        }
    }

    async fn seeded_snapshot() -> Result<(LedgerSnapshot, i64)> {
        let db = setup_test_db().await?;
        let kouassi = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let adjoua = create_test_employee(&db, "Adjoua", Crop::Cacao).await?;
        let supplier = create_test_entrepreneur(&db, "Agro Services").await?;

        create_test_harvest(&db, kouassi.id, 100.0, Some(75)).await?;
        create_test_advance(&db, Beneficiary::Employee(adjoua.id), 1000).await?;
        create_test_advance(&db, Beneficiary::Entrepreneur(supplier.id), 2000).await?;

        Ok((load_snapshot(&db).await?, kouassi.id))
    }

    #[tokio::test]
    async fn test_admin_dashboard() -> Result<()> {
        let (snapshot, _) = seeded_snapshot().await?;
        let dashboard = build_dashboard(&caller(Role::Admin, None), &snapshot);

        // revenue 100 kg * 360 = 36000, minus 7500 pay and 2000 external
        assert_eq!(dashboard.headline, Headline::Profit(26_500));
        let finances = dashboard.finances.unwrap();
        assert_eq!(finances.gross_revenue, 36_000);

        let payroll = dashboard.payroll.unwrap();
        assert_eq!(payroll.gross_worker_pay, 7500);
        assert_eq!(payroll.already_paid_to_workers, 1000);
        assert_eq!(payroll.net_due_to_workers, 6500);
        assert_eq!(payroll.due, vec![("Kouassi".to_string(), 7500)]);
        assert_eq!(payroll.recent_expenses.len(), 1);
        assert_eq!(payroll.recent_expenses[0].beneficiary, "Agro Services");

        Ok(())
    }

    #[tokio::test]
    async fn test_manager_dashboard_hides_profit() -> Result<()> {
        let (snapshot, _) = seeded_snapshot().await?;
        let dashboard = build_dashboard(&caller(Role::Manager, None), &snapshot);

        assert_eq!(dashboard.headline, Headline::GrossWorkerPay(7500));
        assert!(dashboard.payroll.is_some());
        assert!(dashboard.finances.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_worker_dashboard_shows_own_balance_only() -> Result<()> {
        let (snapshot, kouassi) = seeded_snapshot().await?;
        let dashboard = build_dashboard(&caller(Role::Worker, Some(kouassi)), &snapshot);

        assert_eq!(
            dashboard.headline,
            Headline::OwnBalance {
                name: "Kouassi".to_string(),
                due: 7500
            }
        );
        assert!(dashboard.payroll.is_none());
        assert!(dashboard.finances.is_none());

        Ok(())
    }
}
