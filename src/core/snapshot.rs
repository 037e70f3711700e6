//! Loads every collection into a [`LedgerSnapshot`].
//!
//! A snapshot is built fresh for each command. It is produced only when every
//! list succeeds and every row converts, so the ledger never sees partial or
//! corrupt data.

use crate::{
    core::{
        advance::get_all_advances,
        employee::get_all_employees,
        entrepreneur::get_all_entrepreneurs,
        harvest::get_all_harvests,
        rain::get_all_rain_events,
        settings::get_market_settings,
        validation::{validate_amount, validate_pay_rate, validate_weight},
        work_task::get_all_work_tasks,
    },
    entities::harvest,
    errors::{Error, Result},
    models::{Beneficiary, LedgerSnapshot},
};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

fn check_harvests(harvests: &[harvest::Model]) -> Result<()> {
    harvests
        .iter()
        .find(|h| validate_weight(h.weight).is_err() || validate_pay_rate(h.pay_rate).is_err())
        .map_or(Ok(()), |h| {
            Err(Error::CorruptRecord {
                collection: "harvests",
                id: h.id,
                reason: format!("weight {} at rate {}", h.weight, h.pay_rate),
            })
        })
}

fn check_amounts(snapshot: &LedgerSnapshot) -> Result<()> {
    let tasks = snapshot
        .work_tasks
        .iter()
        .map(|t| ("work_tasks", t.id, t.amount));
    let advances = snapshot
        .advances
        .iter()
        .map(|a| ("advances", a.id, a.amount));

    tasks
        .chain(advances)
        .find(|(_, _, amount)| validate_amount(*amount).is_err())
        .map_or(Ok(()), |(collection, id, amount)| {
            Err(Error::CorruptRecord {
                collection,
                id,
                reason: format!("amount {amount}"),
            })
        })
}

/// Distinct employee and entrepreneur ids referenced by records but missing
/// from the registries.
fn orphaned_references(snapshot: &LedgerSnapshot) -> (HashSet<i64>, HashSet<i64>) {
    let employees: HashSet<i64> = snapshot.employees.iter().map(|e| e.id).collect();
    let entrepreneurs: HashSet<i64> = snapshot.entrepreneurs.iter().map(|e| e.id).collect();

    let orphaned_employees = snapshot
        .harvests
        .iter()
        .map(|h| h.employee_id)
        .chain(snapshot.work_tasks.iter().map(|t| t.employee_id))
        .chain(
            snapshot
                .advances
                .iter()
                .filter_map(|a| a.beneficiary.employee_id()),
        )
        .filter(|id| !employees.contains(id))
        .collect();

    let orphaned_entrepreneurs = snapshot
        .advances
        .iter()
        .filter_map(|a| match a.beneficiary {
            Beneficiary::Entrepreneur(id) => Some(id),
            Beneficiary::Employee(_) => None,
        })
        .filter(|id| !entrepreneurs.contains(id))
        .collect();

    (orphaned_employees, orphaned_entrepreneurs)
}

/// Reads every collection and the current settings.
///
/// # Errors
/// - `Database` when any list fails
/// - `CorruptRecord` when a stored row cannot be used in a computation
#[instrument(skip(db))]
pub async fn load_snapshot(db: &DatabaseConnection) -> Result<LedgerSnapshot> {
    let snapshot = LedgerSnapshot {
        employees: get_all_employees(db).await?,
        entrepreneurs: get_all_entrepreneurs(db).await?,
        harvests: get_all_harvests(db).await?,
        work_tasks: get_all_work_tasks(db).await?,
        advances: get_all_advances(db).await?,
        rain_events: get_all_rain_events(db).await?,
        settings: get_market_settings(db).await?,
    };
    check_harvests(&snapshot.harvests)?;
    check_amounts(&snapshot)?;

    let (orphaned_employees, orphaned_entrepreneurs) = orphaned_references(&snapshot);
    if !orphaned_employees.is_empty() {
        warn!(
            count = orphaned_employees.len(),
            "Records reference employees that no longer exist"
        );
    }
    if !orphaned_entrepreneurs.is_empty() {
        warn!(
            count = orphaned_entrepreneurs.len(),
            "Expenses reference entrepreneurs that no longer exist"
        );
    }

    debug!(
        employees = snapshot.employees.len(),
        harvests = snapshot.harvests.len(),
        work_tasks = snapshot.work_tasks.len(),
        advances = snapshot.advances.len(),
        external = snapshot
            .advances
            .iter()
            .filter(|a| matches!(a.beneficiary, Beneficiary::Entrepreneur(_)))
            .count(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            employee::delete_employee, entrepreneur::delete_entrepreneur,
            ledger::compute_plantation_summary,
        },
        entities::Crop,
        test_utils::*,
    };

    #[tokio::test]
    async fn test_empty_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        let snapshot = load_snapshot(&db).await?;

        assert!(snapshot.employees.is_empty());
        assert!(snapshot.advances.is_empty());
        assert_eq!(
            compute_plantation_summary(
                &snapshot.harvests,
                &snapshot.work_tasks,
                &snapshot.advances,
                &snapshot.settings
            ),
            crate::core::ledger::PlantationSummary::default()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_keeps_orphaned_records() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        create_test_harvest(&db, employee.id, 10.0, Some(75)).await?;
        delete_employee(&db, employee.id).await?;

        let snapshot = load_snapshot(&db).await?;
        assert_eq!(snapshot.harvests.len(), 1);
        assert_eq!(snapshot.employee_name(employee.id), "Unknown");

        Ok(())
    }

    #[test]
    fn test_check_harvests_flags_non_finite_weight() {
        let row = harvest::Model {
            id: 3,
            employee_id: 1,
            date: test_date(1),
            weight: f64::NAN,
            pay_rate: 75,
            crop: Crop::Hevea,
        };
        assert!(matches!(
            check_harvests(&[row]),
            Err(Error::CorruptRecord {
                collection: "harvests",
                id: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_check_harvests_flags_implausible_weight() {
        let row = harvest::Model {
            id: 4,
            employee_id: 1,
            date: test_date(1),
            weight: 2e17,
            pay_rate: 75,
            crop: Crop::Hevea,
        };
        assert!(matches!(
            check_harvests(&[row]),
            Err(Error::CorruptRecord {
                collection: "harvests",
                id: 4,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_snapshot_rejects_oversized_stored_amount() -> Result<()> {
        use crate::entities::work_task;
        use sea_orm::{ActiveModelTrait, Set};

        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let row = work_task::ActiveModel {
            employee_id: Set(employee.id),
            date: Set(test_date(2)),
            description: Set("Weeding".to_string()),
            amount: Set(i64::MAX),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let result = load_snapshot(&db).await;
        assert!(matches!(
            result,
            Err(Error::CorruptRecord { collection: "work_tasks", id, .. }) if id == row.id
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_orphaned_references_cover_both_registries() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let supplier = create_test_entrepreneur(&db, "Agro Services").await?;
        create_test_advance(&db, Beneficiary::Employee(employee.id), 1000).await?;
        create_test_advance(&db, Beneficiary::Entrepreneur(supplier.id), 2000).await?;

        let snapshot = load_snapshot(&db).await?;
        let (employees, entrepreneurs) = orphaned_references(&snapshot);
        assert!(employees.is_empty());
        assert!(entrepreneurs.is_empty());

        delete_entrepreneur(&db, supplier.id).await?;
        let snapshot = load_snapshot(&db).await?;
        let (employees, entrepreneurs) = orphaned_references(&snapshot);
        assert!(employees.is_empty());
        assert_eq!(entrepreneurs, HashSet::from([supplier.id]));
        assert_eq!(
            snapshot.beneficiary_name(Beneficiary::Entrepreneur(supplier.id)),
            "Unknown"
        );

        Ok(())
    }
}
