//! Shared test utilities for `AgriPay`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{advance, employee, entrepreneur, harvest, work_task},
    entities::{Crop, ExpenseCategory, PaymentMethod},
    errors::Result,
    models::{Advance, Beneficiary, MarketSettings},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A day in June 2024. Out-of-range days fall back to the epoch default.
#[must_use]
pub fn test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap_or_default()
}

/// Creates a test employee with no phone or notes.
pub async fn create_test_employee(
    db: &DatabaseConnection,
    name: &str,
    crop: Crop,
) -> Result<crate::entities::EmployeeModel> {
    employee::create_employee(
        db,
        employee::NewEmployee {
            name: name.to_string(),
            crop,
            phone: None,
            notes: None,
        },
    )
    .await
}

/// Creates a test entrepreneur with no specialty or phone.
pub async fn create_test_entrepreneur(
    db: &DatabaseConnection,
    name: &str,
) -> Result<crate::entities::EntrepreneurModel> {
    entrepreneur::create_entrepreneur(db, name, None, None).await
}

/// Records a harvest on [`test_date`]`(1)` under the default market settings.
///
/// # Arguments
/// * `pay_rate` - Override; `None` uses the proposed rate
pub async fn create_test_harvest(
    db: &DatabaseConnection,
    employee_id: i64,
    weight: f64,
    pay_rate: Option<i64>,
) -> Result<crate::entities::HarvestModel> {
    harvest::record_harvest(
        db,
        harvest::NewHarvest {
            employee_id,
            date: test_date(1),
            weight,
            pay_rate,
        },
        &MarketSettings::default(),
    )
    .await
}

/// Records a work task on [`test_date`]`(1)` described as "Test task".
pub async fn create_test_task(
    db: &DatabaseConnection,
    employee_id: i64,
    amount: i64,
) -> Result<crate::entities::WorkTaskModel> {
    work_task::record_work_task(db, employee_id, test_date(1), "Test task", amount).await
}

/// Records a cash payment on [`test_date`]`(1)`.
///
/// # Defaults
/// * `category`: ADVANCE for employees, MISC for entrepreneurs
pub async fn create_test_advance(
    db: &DatabaseConnection,
    beneficiary: Beneficiary,
    amount: i64,
) -> Result<Advance> {
    let category = match beneficiary {
        Beneficiary::Employee(_) => ExpenseCategory::Advance,
        Beneficiary::Entrepreneur(_) => ExpenseCategory::Misc,
    };

    advance::record_expense(
        db,
        advance::NewExpense {
            beneficiary,
            date: test_date(1),
            amount,
            category,
            payment_method: Some(PaymentMethod::Cash),
            notes: None,
        },
    )
    .await
}
