//! Employee business logic - the payroll registry.
//!
//! Employees are created ACTIVE and never removed by the ledger. Resigning only
//! stops new harvests and tasks from being recorded against them.

use crate::{
    core::validation::{optional_text, require_text},
    entities::{Crop, Employee, EmployeeStatus, employee},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Palette assigned to new employees and entrepreneurs in rotation
pub const PRESET_COLORS: [&str; 10] = [
    "#2563eb", "#d97706", "#dc2626", "#7c3aed", "#db2777", "#0891b2", "#4f46e5", "#ea580c",
    "#9333ea", "#475569",
];

/// Color for the `index`-th record of a registry.
#[must_use]
pub fn preset_color(index: u64) -> &'static str {
    // Modulo keeps the index below the palette length
    #[allow(clippy::cast_possible_truncation)]
    let slot = (index % PRESET_COLORS.len() as u64) as usize;
    PRESET_COLORS[slot]
}

/// Input for a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Display name
    pub name: String,
    /// Crop the employee will harvest
    pub crop: Crop,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional notes
    pub notes: Option<String>,
}

/// Partial update of an employee's details. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    /// New name
    pub name: Option<String>,
    /// New crop assignment (affects future harvests only)
    pub crop: Option<Crop>,
    /// New phone number
    pub phone: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

/// Retrieves every employee, ordered alphabetically by name.
pub async fn get_all_employees<C>(db: &C) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find()
        .order_by_asc(employee::Column::Name)
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the employees that can receive new harvests and tasks.
pub async fn get_active_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .filter(employee::Column::Status.eq(EmployeeStatus::Active))
        .order_by_asc(employee::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by id.
pub async fn get_employee_by_id<C>(db: &C, employee_id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(employee_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by exact name.
pub async fn get_employee_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<employee::Model>> {
    Employee::find()
        .filter(employee::Column::Name.eq(name.trim()))
        .order_by_asc(employee::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fails with `DuplicateName` when another employee already uses `name`.
async fn ensure_name_available(
    db: &DatabaseConnection,
    name: &str,
    except_id: Option<i64>,
) -> Result<()> {
    match get_employee_by_name(db, name).await? {
        Some(existing) if Some(existing.id) != except_id => Err(Error::DuplicateName {
            kind: "Employee",
            name: name.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Finds an employee by id, failing with `EmployeeNotFound` when absent.
pub async fn require_employee<C>(db: &C, employee_id: i64) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    get_employee_by_id(db, employee_id)
        .await?
        .ok_or_else(|| Error::EmployeeNotFound {
            name: employee_id.to_string(),
        })
}

/// Finds an employee by name, failing with `EmployeeNotFound` when absent.
pub async fn require_employee_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<employee::Model> {
    get_employee_by_name(db, name)
        .await?
        .ok_or_else(|| Error::EmployeeNotFound {
            name: name.to_string(),
        })
}

/// Adds an employee to the registry.
///
/// New employees start ACTIVE with the default icon and the next preset color.
/// Names are unique, since the bot addresses employees by name.
#[instrument(skip(db))]
pub async fn create_employee(db: &DatabaseConnection, new: NewEmployee) -> Result<employee::Model> {
    let name = require_text("Employee name", &new.name)?;
    ensure_name_available(db, &name, None).await?;
    let existing = Employee::find().count(db).await?;

    let employee = employee::ActiveModel {
        name: Set(name),
        status: Set(EmployeeStatus::Active),
        crop: Set(new.crop),
        color: Set(preset_color(existing).to_string()),
        icon_name: Set("user".to_string()),
        created_at: Set(chrono::Utc::now()),
        phone: Set(optional_text(new.phone)),
        notes: Set(optional_text(new.notes)),
        ..Default::default()
    };

    let result = employee.insert(db).await?;
    info!(employee_id = result.id, "Employee '{}' added", result.name);
    Ok(result)
}

/// Updates an employee's name, crop, phone or notes.
#[instrument(skip(db))]
pub async fn update_employee(
    db: &DatabaseConnection,
    employee_id: i64,
    update: EmployeeUpdate,
) -> Result<employee::Model> {
    let employee = require_employee(db, employee_id).await?;
    let mut active_model: employee::ActiveModel = employee.into();

    if let Some(name) = update.name {
        let name = require_text("Employee name", &name)?;
        ensure_name_available(db, &name, Some(employee_id)).await?;
        active_model.name = Set(name);
    }
    if let Some(crop) = update.crop {
        active_model.crop = Set(crop);
    }
    if update.phone.is_some() {
        active_model.phone = Set(optional_text(update.phone));
    }
    if update.notes.is_some() {
        active_model.notes = Set(optional_text(update.notes));
    }

    active_model.update(db).await.map_err(Into::into)
}

/// Marks an employee ACTIVE or RESIGNED.
#[instrument(skip(db))]
pub async fn set_employee_status(
    db: &DatabaseConnection,
    employee_id: i64,
    status: EmployeeStatus,
) -> Result<employee::Model> {
    let employee = require_employee(db, employee_id).await?;
    let mut active_model: employee::ActiveModel = employee.into();
    active_model.status = Set(status);
    let updated = active_model.update(db).await?;
    info!(employee_id, ?status, "Employee status changed");
    Ok(updated)
}

/// Deletes an employee. Their harvests, tasks and advances stay in place.
///
/// Returns `true` when a row was removed.
#[instrument(skip(db))]
pub async fn delete_employee(db: &DatabaseConnection, employee_id: i64) -> Result<bool> {
    let result = Employee::delete_by_id(employee_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
