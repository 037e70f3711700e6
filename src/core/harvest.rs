//! Harvest business logic - recording weighed deliveries.
//!
//! The pay rate stored with a harvest is either the operator's override or the
//! rate proposed from the current settings at entry time. It is never
//! recomputed afterwards.

use crate::{
    core::{
        employee::require_employee,
        ledger::propose_harvest_rate,
        validation::{validate_pay_rate, validate_weight},
    },
    entities::{Harvest, harvest},
    errors::{Error, Result},
    models::MarketSettings,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Input for a new harvest.
#[derive(Debug, Clone)]
pub struct NewHarvest {
    /// Employee who harvested
    pub employee_id: i64,
    /// Harvest day
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    /// Operator override; the proposed rate is used when `None`
    pub pay_rate: Option<i64>,
}

/// Records a harvest for an active employee.
///
/// The crop is copied from the employee and the pay rate is frozen here.
///
/// # Errors
/// - `EmployeeNotFound` / `EmployeeInactive` for an unknown or resigned employee
/// - `InvalidWeight` for a non-positive or non-finite weight
/// - `InvalidPayRate` for a negative override
#[instrument(skip(db, settings))]
pub async fn record_harvest(
    db: &DatabaseConnection,
    new: NewHarvest,
    settings: &MarketSettings,
) -> Result<harvest::Model> {
    let weight = validate_weight(new.weight)?;
    let employee = require_employee(db, new.employee_id).await?;
    if !employee.is_active() {
        return Err(Error::EmployeeInactive {
            name: employee.name,
        });
    }

    let pay_rate = match new.pay_rate {
        Some(rate) => validate_pay_rate(rate)?,
        None => propose_harvest_rate(&employee, settings),
    };

    let harvest = harvest::ActiveModel {
        employee_id: Set(employee.id),
        date: Set(new.date),
        weight: Set(weight),
        pay_rate: Set(pay_rate),
        crop: Set(employee.crop),
        ..Default::default()
    };

    let result = harvest.insert(db).await?;
    info!(
        harvest_id = result.id,
        employee_id = employee.id,
        weight,
        pay_rate,
        "Harvest recorded"
    );
    Ok(result)
}

/// Retrieves every harvest, newest first.
pub async fn get_all_harvests(db: &DatabaseConnection) -> Result<Vec<harvest::Model>> {
    Harvest::find()
        .order_by_desc(harvest::Column::Date)
        .order_by_desc(harvest::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one employee's harvests, newest first.
pub async fn get_harvests_for_employee<C>(db: &C, employee_id: i64) -> Result<Vec<harvest::Model>>
where
    C: ConnectionTrait,
{
    Harvest::find()
        .filter(harvest::Column::EmployeeId.eq(employee_id))
        .order_by_desc(harvest::Column::Date)
        .order_by_desc(harvest::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a harvest. Returns `true` when a row was removed.
#[instrument(skip(db))]
pub async fn delete_harvest(db: &DatabaseConnection, harvest_id: i64) -> Result<bool> {
    let result = Harvest::delete_by_id(harvest_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        core::employee::set_employee_status,
        entities::{Crop, EmployeeStatus},
        test_utils::*,
    };

    #[tokio::test]
    async fn test_record_harvest_uses_proposed_rate() -> Result<()> {
        let db = setup_test_db().await?;
        let hevea = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let cacao = create_test_employee(&db, "Adjoua", Crop::Cacao).await?;
        let settings = MarketSettings::default();

        let h1 = record_harvest(
            &db,
            NewHarvest {
                employee_id: hevea.id,
                date: test_date(1),
                weight: 100.0,
                pay_rate: None,
            },
            &settings,
        )
        .await?;
        let h2 = record_harvest(
            &db,
            NewHarvest {
                employee_id: cacao.id,
                date: test_date(1),
                weight: 20.0,
                pay_rate: None,
            },
            &settings,
        )
        .await?;

        assert_eq!(h1.pay_rate, 75);
        assert_eq!(h1.crop, Crop::Hevea);
        assert_eq!(h2.pay_rate, 933);
        assert_eq!(h2.crop, Crop::Cacao);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_harvest_keeps_override() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        let harvest = create_test_harvest(&db, employee.id, 50.0, Some(90)).await?;
        assert_eq!(harvest.pay_rate, 90);
        assert_eq!(harvest.weight, 50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_stored_rate_survives_settings_change() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let harvest = create_test_harvest(&db, employee.id, 10.0, None).await?;

        crate::core::settings::update_market_settings(
            &db,
            MarketSettings {
                pay_rate_hevea: 200,
                market_price_hevea: 900,
                ..MarketSettings::default()
            },
        )
        .await?;

        let stored = get_all_harvests(&db).await?;
        assert_eq!(stored[0].id, harvest.id);
        assert_eq!(stored[0].pay_rate, 75);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_harvest_rejects_bad_weight() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        for weight in [0.0, -3.0, f64::NAN] {
            let result = create_test_harvest(&db, employee.id, weight, None).await;
            assert!(matches!(result, Err(Error::InvalidWeight { .. })));
        }
        assert!(get_all_harvests(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_record_harvest_rejects_negative_rate() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        let result = create_test_harvest(&db, employee.id, 10.0, Some(-5)).await;
        assert!(matches!(result, Err(Error::InvalidPayRate { rate: -5 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_harvest_rejects_resigned_employee() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Moussa", Crop::Cacao).await?;
        set_employee_status(&db, employee.id, EmployeeStatus::Resigned).await?;

        let result = create_test_harvest(&db, employee.id, 10.0, None).await;
        assert!(matches!(result, Err(Error::EmployeeInactive { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_harvest_unknown_employee() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_test_harvest(&db, 99, 10.0, None).await;
        assert!(matches!(result, Err(Error::EmployeeNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_harvests_newest_first_and_delete() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        let settings = MarketSettings::default();
        for d in [3, 1, 2] {
            record_harvest(
                &db,
                NewHarvest {
                    employee_id: employee.id,
                    date: test_date(d),
                    weight: 10.0,
                    pay_rate: None,
                },
                &settings,
            )
            .await?;
        }

        let dates: Vec<NaiveDate> = get_all_harvests(&db)
            .await?
            .into_iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(dates, vec![test_date(3), test_date(2), test_date(1)]);

        let first = get_harvests_for_employee(&db, employee.id).await?[0].id;
        assert!(delete_harvest(&db, first).await?);
        assert_eq!(get_all_harvests(&db).await?.len(), 2);

        Ok(())
    }
}
