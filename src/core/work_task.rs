//! Work task business logic - flat piece-work payments.

use crate::{
    core::{
        employee::require_employee,
        validation::{require_text, validate_amount},
    },
    entities::{WorkTask, work_task},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Records a piece-work task for an active employee.
///
/// # Errors
/// - `EmployeeNotFound` / `EmployeeInactive` for an unknown or resigned employee
/// - `InvalidAmount` for a non-positive amount
/// - `Config` for an empty description
#[instrument(skip(db))]
pub async fn record_work_task(
    db: &DatabaseConnection,
    employee_id: i64,
    date: NaiveDate,
    description: &str,
    amount: i64,
) -> Result<work_task::Model> {
    let amount = validate_amount(amount)?;
    let description = require_text("Task description", description)?;
    let employee = require_employee(db, employee_id).await?;
    if !employee.is_active() {
        return Err(Error::EmployeeInactive {
            name: employee.name,
        });
    }

    let task = work_task::ActiveModel {
        employee_id: Set(employee.id),
        date: Set(date),
        description: Set(description),
        amount: Set(amount),
        ..Default::default()
    };

    let result = task.insert(db).await?;
    info!(task_id = result.id, employee_id, amount, "Work task recorded");
    Ok(result)
}

/// Retrieves every work task, newest first.
pub async fn get_all_work_tasks(db: &DatabaseConnection) -> Result<Vec<work_task::Model>> {
    WorkTask::find()
        .order_by_desc(work_task::Column::Date)
        .order_by_desc(work_task::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one employee's work tasks, newest first.
pub async fn get_work_tasks_for_employee<C>(
    db: &C,
    employee_id: i64,
) -> Result<Vec<work_task::Model>>
where
    C: ConnectionTrait,
{
    WorkTask::find()
        .filter(work_task::Column::EmployeeId.eq(employee_id))
        .order_by_desc(work_task::Column::Date)
        .order_by_desc(work_task::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a work task. Returns `true` when a row was removed.
#[instrument(skip(db))]
pub async fn delete_work_task(db: &DatabaseConnection, task_id: i64) -> Result<bool> {
    let result = WorkTask::delete_by_id(task_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
