//! Team Discord commands - employees and entrepreneurs.
//!
//! Listing and editing the registry needs a MANAGER or ADMIN role. Workers may
//! only open their own `employee_info`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData, authorize,
            choices::{CropChoice, StatusChoice},
            handlers::autocomplete,
        },
        core::{
            access::Action,
            employee::{self, EmployeeUpdate, NewEmployee},
            entrepreneur,
            journal::employee_activity,
            ledger::{compute_employee_balance, compute_employee_earnings},
            report::{format_activity_entry, format_balance, format_currency},
            snapshot::load_snapshot,
        },
        entities::EmployeeStatus,
        errors::{Error, Result},
        models::LedgerSnapshot,
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Number of activity lines shown by `employee_info`
    const ACTIVITY_LIMIT: usize = 10;

    /// Most fields Discord accepts in one embed
    const FIELDS_PER_EMBED: usize = 25;

    type EmbedField = (String, String, bool);

    /// One embed field per employee, split into pages Discord accepts.
    fn employee_pages(snapshot: &LedgerSnapshot) -> Vec<Vec<EmbedField>> {
        let fields: Vec<EmbedField> = snapshot
            .employees
            .iter()
            .map(|e| {
                let balance = compute_employee_balance(
                    e.id,
                    &snapshot.harvests,
                    &snapshot.work_tasks,
                    &snapshot.advances,
                );
                let status = match e.status {
                    EmployeeStatus::Active => "",
                    EmployeeStatus::Resigned => " (resigned)",
                };
                (
                    format!("{}{status}", e.name),
                    format!("{} | {}", e.crop.label(), format_balance(balance)),
                    true,
                )
            })
            .collect();

        fields
            .chunks(FIELDS_PER_EMBED)
            .map(<[EmbedField]>::to_vec)
            .collect()
    }

    /// Lists every employee with their current balance.
    ///
    /// Large teams are sent as several messages of 25 employees each.
    #[poise::command(slash_command)]
    pub async fn employees(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        authorize(ctx, Action::ViewPayroll).await?;
        let snapshot = load_snapshot(&ctx.data().database).await?;

        if snapshot.employees.is_empty() {
            ctx.say("👥 No employees yet. Add one with `/add_employee`.")
                .await?;
            return Ok(());
        }

        let pages = employee_pages(&snapshot);
        let total = pages.len();
        for (index, fields) in pages.into_iter().enumerate() {
            let title = if total == 1 {
                "**Employees**".to_string()
            } else {
                format!("**Employees** ({}/{total})", index + 1)
            };
            let embed = serenity::CreateEmbed::default()
                .title(title)
                .color(0x0025_63eb)
                .fields(fields);
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        }
        Ok(())
    }

    /// Shows an employee's earnings, balance and recent activity.
    ///
    /// Workers see their own record when no name is given.
    #[poise::command(slash_command)]
    pub async fn employee_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee (defaults to yourself)"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: Option<String>,
    ) -> Result<()> {
        let caller = authorize(ctx, Action::ViewDashboard).await?;
        let snapshot = load_snapshot(&ctx.data().database).await?;

        let employee = match employee_name.as_deref() {
            Some(name) => snapshot
                .employees
                .iter()
                .find(|e| e.name == name.trim())
                .ok_or_else(|| Error::EmployeeNotFound {
                    name: name.to_string(),
                })?,
            None => caller
                .employee_id
                .and_then(|id| snapshot.employee(id))
                .ok_or_else(|| Error::EmployeeNotFound {
                    name: "(no linked employee)".to_string(),
                })?,
        };
        if !caller.can_view_employee(employee.id) {
            caller.authorize(Action::ViewPayroll)?;
        }

        let earned =
            compute_employee_earnings(employee.id, &snapshot.harvests, &snapshot.work_tasks);
        let balance = compute_employee_balance(
            employee.id,
            &snapshot.harvests,
            &snapshot.work_tasks,
            &snapshot.advances,
        );

        let mut activity = String::new();
        for entry in employee_activity(
            employee.id,
            &snapshot.harvests,
            &snapshot.work_tasks,
            &snapshot.advances,
            ACTIVITY_LIMIT,
        ) {
            writeln!(activity, "{}", format_activity_entry(&entry))?;
        }
        if activity.is_empty() {
            activity.push_str("No activity yet.");
        }

        let mut details = format!("{} | {:?}", employee.crop.label(), employee.status);
        if let Some(phone) = &employee.phone {
            write!(details, " | {phone}")?;
        }

        let embed = serenity::CreateEmbed::default()
            .title(format!("**{}**", employee.name))
            .description(details)
            .color(0x0025_63eb)
            .field("Total earned", format_currency(earned), true)
            .field("Balance", format_balance(balance), true)
            .field("Recent activity", activity, false);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Adds an employee to the registry.
    #[poise::command(slash_command)]
    pub async fn add_employee(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee name"] name: String,
        #[description = "Crop the employee harvests"] crop: CropChoice,
        #[description = "Phone number"] phone: Option<String>,
        #[description = "Notes"] notes: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::ManageTeam).await?;

        let created = employee::create_employee(
            &ctx.data().database,
            NewEmployee {
                name,
                crop: crop.into(),
                phone,
                notes,
            },
        )
        .await?;

        ctx.say(format!(
            "✅ Employee '{}' added ({}) (ID: {})",
            created.name,
            created.crop.label(),
            created.id
        ))
        .await?;
        Ok(())
    }

    /// Updates an employee's details. A crop change affects future harvests only.
    #[poise::command(slash_command)]
    pub async fn update_employee(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee to update"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: String,
        #[description = "New name"] name: Option<String>,
        #[description = "New crop"] crop: Option<CropChoice>,
        #[description = "New phone number"] phone: Option<String>,
        #[description = "New notes"] notes: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::ManageTeam).await?;
        let db = &ctx.data().database;

        let existing = employee::require_employee_by_name(db, &employee_name).await?;
        let updated = employee::update_employee(
            db,
            existing.id,
            EmployeeUpdate {
                name,
                crop: crop.map(Into::into),
                phone,
                notes,
            },
        )
        .await?;

        ctx.say(format!("✅ Employee '{}' updated.", updated.name))
            .await?;
        Ok(())
    }

    /// Marks an employee active or resigned.
    #[poise::command(slash_command)]
    pub async fn set_status(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: String,
        #[description = "New status"] status: StatusChoice,
    ) -> Result<()> {
        authorize(ctx, Action::ManageTeam).await?;
        let db = &ctx.data().database;

        let existing = employee::require_employee_by_name(db, &employee_name).await?;
        let updated = employee::set_employee_status(db, existing.id, status.into()).await?;

        ctx.say(format!(
            "✅ {} is now {:?}.",
            updated.name, updated.status
        ))
        .await?;
        Ok(())
    }

    /// Lists suppliers and contractors.
    #[poise::command(slash_command)]
    pub async fn entrepreneurs(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        authorize(ctx, Action::ViewPayroll).await?;
        let list = entrepreneur::get_all_entrepreneurs(&ctx.data().database).await?;

        if list.is_empty() {
            ctx.say("🏗️ No entrepreneurs yet. Add one with `/add_entrepreneur`.")
                .await?;
            return Ok(());
        }

        let mut response = String::from("**Entrepreneurs**\n");
        for e in &list {
            write!(response, "• {}", e.name)?;
            if let Some(specialty) = &e.specialty {
                write!(response, " ({specialty})")?;
            }
            if let Some(phone) = &e.phone {
                write!(response, " | {phone}")?;
            }
            response.push('\n');
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Adds a supplier or contractor.
    #[poise::command(slash_command)]
    pub async fn add_entrepreneur(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name"] name: String,
        #[description = "Specialty (e.g., transport, fertilizer)"] specialty: Option<String>,
        #[description = "Phone number"] phone: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::ManageTeam).await?;

        let created =
            entrepreneur::create_entrepreneur(&ctx.data().database, &name, specialty, phone)
                .await?;

        ctx.say(format!(
            "✅ Entrepreneur '{}' added (ID: {})",
            created.name, created.id
        ))
        .await?;
        Ok(())
    }

}

// Re-export all commands
pub use inner::*;
