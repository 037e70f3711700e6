//! Administration Discord commands - `delete_record` and `set_role`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData, authorize,
            choices::{RecordKind, RoleChoice},
            handlers::autocomplete,
        },
        core::{
            access::{self, Action},
            advance, employee, entrepreneur, harvest, rain, work_task,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Deletes any record by id.
    ///
    /// Deleting an employee or entrepreneur keeps their records; those then show
    /// as "Unknown".
    #[poise::command(slash_command)]
    pub async fn delete_record(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Kind of record"] kind: RecordKind,
        #[description = "Record ID"] id: i64,
    ) -> Result<()> {
        let caller = authorize(ctx, Action::DeleteRecords).await?;
        let db = &ctx.data().database;

        let deleted = match kind {
            RecordKind::Harvest => harvest::delete_harvest(db, id).await?,
            RecordKind::Task => work_task::delete_work_task(db, id).await?,
            RecordKind::Advance => advance::delete_advance(db, id).await?,
            RecordKind::Rain => rain::delete_rain_event(db, id).await?,
            RecordKind::Employee => employee::delete_employee(db, id).await?,
            RecordKind::Entrepreneur => entrepreneur::delete_entrepreneur(db, id).await?,
        };

        if deleted {
            info!(user_id = %caller.user_id, ?kind, id, "Record deleted");
            ctx.say(format!("🗑️ {kind:?} #{id} deleted.")).await?;
        } else {
            ctx.say(format!("❌ No {kind:?} with ID {id}.")).await?;
        }
        Ok(())
    }

    /// Grants a role to a Discord user. Workers must be linked to an employee.
    #[poise::command(slash_command)]
    pub async fn set_role(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "User to grant the role to"] user: serenity::User,
        #[description = "Role"] role: RoleChoice,
        #[description = "Employee record of this user (required for workers)"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::AssignRoles).await?;
        let db = &ctx.data().database;

        let employee_id = match employee_name.as_deref() {
            Some(name) => Some(employee::require_employee_by_name(db, name).await?.id),
            None => None,
        };
        let profile =
            access::assign_role(db, &user.id.to_string(), role.into(), employee_id).await?;

        ctx.say(format!("✅ {} is now {:?}.", user.name, profile.role))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
