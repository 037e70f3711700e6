//! Identity and permission checks.
//!
//! A caller is identified by their Discord user id. Their role comes from the
//! `profiles` collection, except for bootstrap administrators configured in the
//! environment, who are always ADMIN.

use crate::{
    core::employee::require_employee,
    entities::{Profile, Role, profile},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info, instrument};

/// Something a caller may try to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the dashboard (content depends on the role)
    ViewDashboard,
    /// See aggregate payroll figures and other employees' balances
    ViewPayroll,
    /// See revenue and profit
    ViewProfit,
    /// Add harvests, tasks, expenses and rain events
    RecordEntries,
    /// Add or edit employees and entrepreneurs
    ManageTeam,
    /// Pay out an employee's balance
    SettleBalance,
    /// Change market settings
    EditSettings,
    /// Delete any record
    DeleteRecords,
    /// Grant roles to users
    AssignRoles,
}

impl Action {
    /// Whether a role may perform this action.
    #[must_use]
    pub const fn allowed_for(self, role: Role) -> bool {
        match role {
            Role::Admin => true,
            Role::Manager => matches!(
                self,
                Self::ViewDashboard
                    | Self::ViewPayroll
                    | Self::RecordEntries
                    | Self::ManageTeam
                    | Self::SettleBalance
            ),
            Role::Worker => matches!(self, Self::ViewDashboard),
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::ViewDashboard => "viewing the dashboard",
            Self::ViewPayroll => "viewing payroll",
            Self::ViewProfit => "viewing profit",
            Self::RecordEntries => "recording entries",
            Self::ManageTeam => "managing the team",
            Self::SettleBalance => "settling balances",
            Self::EditSettings => "editing settings",
            Self::DeleteRecords => "deleting records",
            Self::AssignRoles => "assigning roles",
        }
    }

    const fn required(self) -> &'static str {
        if Self::allowed_for(self, Role::Manager) {
            "MANAGER or ADMIN"
        } else {
            "ADMIN"
        }
    }
}

/// The authenticated user behind a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Discord user id
    pub user_id: String,
    /// Effective role
    pub role: Role,
    /// Linked employee record, for WORKER callers
    pub employee_id: Option<i64>,
}

impl Caller {
    /// Fails with `PermissionDenied` unless the caller's role allows `action`.
    ///
    /// # Errors
    /// `PermissionDenied` naming the action and the role it needs.
    pub fn authorize(&self, action: Action) -> Result<()> {
        if action.allowed_for(self.role) {
            Ok(())
        } else {
            debug!(user_id = %self.user_id, role = ?self.role, ?action, "Permission denied");
            Err(Error::PermissionDenied {
                action: action.description().to_string(),
                required: action.required().to_string(),
            })
        }
    }

    /// True when the caller may see the given employee's balance.
    #[must_use]
    pub fn can_view_employee(&self, employee_id: i64) -> bool {
        Action::ViewPayroll.allowed_for(self.role) || self.employee_id == Some(employee_id)
    }
}

/// Finds the profile of a user.
pub async fn get_profile(db: &DatabaseConnection, user_id: &str) -> Result<Option<profile::Model>> {
    Profile::find()
        .filter(profile::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Resolves the role of a user.
///
/// Bootstrap administrators are ADMIN whatever their profile says.
///
/// # Errors
/// `UnknownUser` when the user has no profile and is not a bootstrap administrator.
#[instrument(skip(db, admin_user_ids))]
pub async fn resolve_role(
    db: &DatabaseConnection,
    user_id: &str,
    admin_user_ids: &[String],
) -> Result<Caller> {
    let profile = get_profile(db, user_id).await?;
    let employee_id = profile.as_ref().and_then(|p| p.employee_id);

    if admin_user_ids.iter().any(|id| id == user_id) {
        return Ok(Caller {
            user_id: user_id.to_string(),
            role: Role::Admin,
            employee_id,
        });
    }

    profile
        .map(|p| Caller {
            user_id: p.user_id,
            role: p.role,
            employee_id: p.employee_id,
        })
        .ok_or_else(|| Error::UnknownUser {
            user_id: user_id.to_string(),
        })
}

/// Grants a role to a user, creating or replacing their profile.
///
/// # Errors
/// - `Config` when a WORKER role is given without an employee
/// - `EmployeeNotFound` when the linked employee does not exist
#[instrument(skip(db))]
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: &str,
    role: Role,
    employee_id: Option<i64>,
) -> Result<profile::Model> {
    if role == Role::Worker && employee_id.is_none() {
        return Err(Error::Config {
            message: "A WORKER profile must be linked to an employee".to_string(),
        });
    }
    if let Some(id) = employee_id {
        require_employee(db, id).await?;
    }

    let result = match get_profile(db, user_id).await? {
        Some(existing) => {
            let mut active_model: profile::ActiveModel = existing.into();
            active_model.role = Set(role);
            active_model.employee_id = Set(employee_id);
            active_model.update(db).await?
        }
        None => {
            profile::ActiveModel {
                user_id: Set(user_id.to_string()),
                role: Set(role),
                employee_id: Set(employee_id),
                created_at: Set(chrono::Utc::now()),
                ..Default::default()
            }
            .insert(db)
            .await?
        }
    };

    info!(user_id, ?role, "Role assigned");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Crop, test_utils::*};

    #[test]
    fn test_permission_matrix() {
        assert!(Action::ViewProfit.allowed_for(Role::Admin));
        assert!(!Action::ViewProfit.allowed_for(Role::Manager));
        assert!(!Action::ViewProfit.allowed_for(Role::Worker));

        assert!(Action::RecordEntries.allowed_for(Role::Manager));
        assert!(Action::SettleBalance.allowed_for(Role::Manager));
        assert!(!Action::DeleteRecords.allowed_for(Role::Manager));
        assert!(!Action::EditSettings.allowed_for(Role::Manager));

        assert!(Action::ViewDashboard.allowed_for(Role::Worker));
        assert!(!Action::ViewPayroll.allowed_for(Role::Worker));
        assert!(!Action::RecordEntries.allowed_for(Role::Worker));
    }

    #[test]
    fn test_authorize_reports_required_role() {
        let manager = Caller {
            user_id: "1".to_string(),
            role: Role::Manager,
            employee_id: None,
        };
        let err = manager.authorize(Action::DeleteRecords);
        assert!(matches!(
            err,
            Err(Error::PermissionDenied { ref required, .. }) if required == "ADMIN"
        ));
        assert!(manager.authorize(Action::RecordEntries).is_ok());
    }

    #[test]
    fn test_worker_sees_only_own_balance() {
        let worker = Caller {
            user_id: "2".to_string(),
            role: Role::Worker,
            employee_id: Some(5),
        };
        assert!(worker.can_view_employee(5));
        assert!(!worker.can_view_employee(6));
    }

    #[tokio::test]
    async fn test_unknown_user_is_refused() -> Result<()> {
        let db = setup_test_db().await?;
        let result = resolve_role(&db, "999", &[]).await;
        assert!(matches!(result, Err(Error::UnknownUser { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_bootstrap_admin_without_profile() -> Result<()> {
        let db = setup_test_db().await?;
        let caller = resolve_role(&db, "42", &["42".to_string()]).await?;
        assert_eq!(caller.role, Role::Admin);
        Ok(())
    }

    #[tokio::test]
    async fn test_assign_and_resolve_worker() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "Kouassi", Crop::Hevea).await?;

        assign_role(&db, "77", Role::Manager, None).await?;
        assign_role(&db, "77", Role::Worker, Some(employee.id)).await?;

        let caller = resolve_role(&db, "77", &[]).await?;
        assert_eq!(caller.role, Role::Worker);
        assert_eq!(caller.employee_id, Some(employee.id));
        assert_eq!(Profile::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_worker_role_needs_employee() -> Result<()> {
        let db = setup_test_db().await?;

        let unlinked = assign_role(&db, "5", Role::Worker, None).await;
        assert!(matches!(unlinked, Err(Error::Config { .. })));

        let missing = assign_role(&db, "5", Role::Worker, Some(31)).await;
        assert!(matches!(missing, Err(Error::EmployeeNotFound { .. })));

        Ok(())
    }
}
