//! Advance and expense business logic.
//!
//! Salary advances, balance settlements and supplier purchases all land in the
//! `advances` collection. Only the beneficiary tells them apart: employee
//! payments reduce a balance, entrepreneur payments count as expenses.

use crate::{
    core::{
        employee::require_employee,
        harvest::get_harvests_for_employee,
        ledger::compute_employee_balance,
        validation::{optional_text, validate_amount},
        work_task::get_work_tasks_for_employee,
    },
    entities::{Advance as AdvanceEntity, Entrepreneur, ExpenseCategory, PaymentMethod, advance},
    errors::{Error, Result},
    models::{Advance, Beneficiary},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Note attached to the advance created by [`settle_employee_balance`]
pub const SETTLEMENT_NOTE: &str = "Final balance settlement";

/// Input for a new outgoing payment.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Who gets paid
    pub beneficiary: Beneficiary,
    /// Payment day
    pub date: NaiveDate,
    /// Amount paid, > 0
    pub amount: i64,
    /// Spending category
    pub category: ExpenseCategory,
    /// Cash or transfer
    pub payment_method: Option<PaymentMethod>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Checks that the beneficiary exists. Resigned employees may still be paid.
async fn ensure_beneficiary_exists<C>(db: &C, beneficiary: Beneficiary) -> Result<()>
where
    C: ConnectionTrait,
{
    match beneficiary {
        Beneficiary::Employee(id) => {
            require_employee(db, id).await?;
        }
        Beneficiary::Entrepreneur(id) => {
            if Entrepreneur::find_by_id(id).one(db).await?.is_none() {
                return Err(Error::EntrepreneurNotFound {
                    name: id.to_string(),
                });
            }
        }
    }
    Ok(())
}

async fn insert_expense<C>(db: &C, new: NewExpense) -> Result<advance::Model>
where
    C: ConnectionTrait,
{
    let (employee_id, entrepreneur_id) = new.beneficiary.into_columns();
    let row = advance::ActiveModel {
        employee_id: Set(employee_id),
        entrepreneur_id: Set(entrepreneur_id),
        date: Set(new.date),
        amount: Set(new.amount),
        category: Set(new.category),
        payment_method: Set(new.payment_method),
        notes: Set(optional_text(new.notes)),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}

/// Records a salary advance or an external expense.
///
/// # Errors
/// - `InvalidAmount` for a non-positive amount
/// - `EmployeeNotFound` / `EntrepreneurNotFound` when the beneficiary does not exist
#[instrument(skip(db))]
pub async fn record_expense(db: &DatabaseConnection, new: NewExpense) -> Result<Advance> {
    validate_amount(new.amount)?;
    ensure_beneficiary_exists(db, new.beneficiary).await?;

    let row = insert_expense(db, new).await?;
    info!(
        advance_id = row.id,
        amount = row.amount,
        category = row.category.label(),
        "Expense recorded"
    );
    Advance::try_from(row)
}

/// Retrieves every advance and expense, newest first.
///
/// # Errors
/// `CorruptRecord` when a stored row names no beneficiary or both.
pub async fn get_all_advances(db: &DatabaseConnection) -> Result<Vec<Advance>> {
    AdvanceEntity::find()
        .order_by_desc(advance::Column::Date)
        .order_by_desc(advance::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Advance::try_from)
        .collect()
}

/// Retrieves the advances paid to one employee, newest first.
pub async fn get_advances_for_employee<C>(db: &C, employee_id: i64) -> Result<Vec<Advance>>
where
    C: ConnectionTrait,
{
    AdvanceEntity::find()
        .filter(advance::Column::EmployeeId.eq(employee_id))
        .order_by_desc(advance::Column::Date)
        .order_by_desc(advance::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Advance::try_from)
        .collect()
}

/// Pays out an employee's full positive balance.
///
/// The balance is computed and the settling advance inserted in one
/// transaction, so two concurrent settlements cannot both pay the same amount.
///
/// # Errors
/// - `EmployeeNotFound` for an unknown employee
/// - `NothingDue` when the balance is zero or negative
#[instrument(skip(db))]
pub async fn settle_employee_balance(
    db: &DatabaseConnection,
    employee_id: i64,
    date: NaiveDate,
    payment_method: Option<PaymentMethod>,
) -> Result<Advance> {
    let txn = db.begin().await?;

    let employee = require_employee(&txn, employee_id).await?;
    let harvests = get_harvests_for_employee(&txn, employee_id).await?;
    let work_tasks = get_work_tasks_for_employee(&txn, employee_id).await?;
    let advances = get_advances_for_employee(&txn, employee_id).await?;

    let balance = compute_employee_balance(employee_id, &harvests, &work_tasks, &advances);
    if balance <= 0 {
        return Err(Error::NothingDue {
            name: employee.name,
            balance,
        });
    }

    let row = insert_expense(
        &txn,
        NewExpense {
            beneficiary: Beneficiary::Employee(employee_id),
            date,
            amount: balance,
            category: ExpenseCategory::Advance,
            payment_method,
            notes: Some(SETTLEMENT_NOTE.to_string()),
        },
    )
    .await?;
    txn.commit().await?;

    info!(employee_id, amount = balance, "Balance of '{}' settled", employee.name);
    Advance::try_from(row)
}

/// Deletes an advance or expense. Returns `true` when a row was removed.
#[instrument(skip(db))]
pub async fn delete_advance(db: &DatabaseConnection, advance_id: i64) -> Result<bool> {
    let result = AdvanceEntity::delete_by_id(advance_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::employee::set_employee_status,
        entities::{Crop, EmployeeStatus},
        test_utils::*,
    };

    #[tokio::test]
    async fn test_record_employee_advance() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        let advance = record_expense(
            &db,
            NewExpense {
                beneficiary: Beneficiary::Employee(employee.id),
                date: test_date(5),
                amount: 5000,
                category: ExpenseCategory::Advance,
                payment_method: Some(PaymentMethod::Cash),
                notes: Some("  ".to_string()),
            },
        )
        .await?;

        assert_eq!(advance.beneficiary, Beneficiary::Employee(employee.id));
        assert_eq!(advance.notes, None);
        assert_eq!(get_advances_for_employee(&db, employee.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_expense_for_entrepreneur() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_entrepreneur(&db, "Agro Services").await?;

        let advance = create_test_advance(&db, Beneficiary::Entrepreneur(supplier.id), 12000).await?;
        assert_eq!(advance.beneficiary, Beneficiary::Entrepreneur(supplier.id));

        let all = get_all_advances(&db).await?;
        assert_eq!(all.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_expense_unknown_beneficiary() -> Result<()> {
        let db = setup_test_db().await?;

        let employee = create_test_advance(&db, Beneficiary::Employee(404), 100).await;
        assert!(matches!(employee, Err(Error::EmployeeNotFound { .. })));

        let supplier = create_test_advance(&db, Beneficiary::Entrepreneur(404), 100).await;
        assert!(matches!(supplier, Err(Error::EntrepreneurNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_expense_rejects_non_positive_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        let result = create_test_advance(&db, Beneficiary::Employee(employee.id), -10).await;
        assert!(matches!(result, Err(Error::InvalidAmount { amount: -10 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_resigned_employee_can_still_be_paid() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Moussa", Crop::Cacao).await?;
        set_employee_status(&db, employee.id, EmployeeStatus::Resigned).await?;

        create_test_advance(&db, Beneficiary::Employee(employee.id), 1000).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_settle_employee_balance() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        create_test_harvest(&db, employee.id, 100.0, Some(75)).await?;
        create_test_task(&db, employee.id, 2000).await?;
        create_test_advance(&db, Beneficiary::Employee(employee.id), 4000).await?;

        let settlement =
            settle_employee_balance(&db, employee.id, test_date(20), Some(PaymentMethod::Transfer))
                .await?;
        assert_eq!(settlement.amount, 7500 + 2000 - 4000);
        assert_eq!(settlement.category, ExpenseCategory::Advance);
        assert_eq!(settlement.notes.as_deref(), Some(SETTLEMENT_NOTE));

        let again = settle_employee_balance(&db, employee.id, test_date(21), None).await;
        assert!(matches!(again, Err(Error::NothingDue { balance: 0, .. })));
        assert_eq!(get_advances_for_employee(&db, employee.id).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_settle_overdrawn_employee() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Adjoua", Crop::Cacao).await?;
        create_test_advance(&db, Beneficiary::Employee(employee.id), 3000).await?;

        let result = settle_employee_balance(&db, employee.id, test_date(2), None).await;
        assert!(matches!(result, Err(Error::NothingDue { balance: -3000, .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_row_fails_listing() -> Result<()> {
        let db = setup_test_db().await?;
        advance::ActiveModel {
            employee_id: Set(None),
            entrepreneur_id: Set(None),
            date: Set(test_date(1)),
            amount: Set(100),
            category: Set(ExpenseCategory::Misc),
            payment_method: Set(None),
            notes: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let result = get_all_advances(&db).await;
        assert!(matches!(
            result,
            Err(Error::CorruptRecord {
                collection: "advances",
                ..
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_advance() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;
        let advance = create_test_advance(&db, Beneficiary::Employee(employee.id), 500).await?;

        assert!(delete_advance(&db, advance.id).await?);
        assert!(!delete_advance(&db, advance.id).await?);

        Ok(())
    }
}
