//! Entry Discord commands - `harvest`, `task`, `expense`, `settle` and `rain`.
//!
//! Every command here writes one record through the core modules. Validation
//! errors come back as `Error` values and are reported by the framework error
//! handler.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData, authorize,
            choices::{CategoryChoice, IntensityChoice, PaymentChoice, PeriodChoice},
            handlers::autocomplete,
        },
        core::{
            access::Action,
            advance::{self, NewExpense},
            employee, entrepreneur,
            harvest::{self, NewHarvest},
            rain,
            report::{format_currency, format_weight},
            settings,
            validation::parse_date_or_today,
            work_task,
        },
        errors::{Error, Result},
        models::Beneficiary,
    };

    /// Records a harvest. The rate defaults to the current proposal.
    #[poise::command(slash_command)]
    pub async fn harvest(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee who harvested"]
        #[autocomplete = "autocomplete::autocomplete_active_employee_name"]
        employee_name: String,
        #[description = "Weight in kg"] weight: f64,
        #[description = "Pay rate per kg (defaults to the proposed rate)"] rate: Option<i64>,
        #[description = "Harvest day, YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let db = &ctx.data().database;

        let date = parse_date_or_today(date.as_deref())?;
        let employee = employee::require_employee_by_name(db, &employee_name).await?;
        let market = settings::get_market_settings(db).await?;

        let recorded = harvest::record_harvest(
            db,
            NewHarvest {
                employee_id: employee.id,
                date,
                weight,
                pay_rate: rate,
            },
            &market,
        )
        .await?;

        ctx.say(format!(
            "✅ Harvest of {} {} for {} on {} at {}/kg (ID: {})",
            format_weight(recorded.weight),
            recorded.crop.label(),
            employee.name,
            recorded.date,
            format_currency(recorded.pay_rate),
            recorded.id
        ))
        .await?;
        Ok(())
    }

    /// Records a piece-work task paid at a flat amount.
    #[poise::command(slash_command)]
    pub async fn task(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee who did the work"]
        #[autocomplete = "autocomplete::autocomplete_active_employee_name"]
        employee_name: String,
        #[description = "What was done"] description: String,
        #[description = "Amount paid for the task"] amount: i64,
        #[description = "Day of the task, YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let db = &ctx.data().database;

        let date = parse_date_or_today(date.as_deref())?;
        let employee = employee::require_employee_by_name(db, &employee_name).await?;
        let recorded =
            work_task::record_work_task(db, employee.id, date, &description, amount).await?;

        ctx.say(format!(
            "✅ Task '{}' for {} recorded: {} (ID: {})",
            recorded.description,
            employee.name,
            format_currency(recorded.amount),
            recorded.id
        ))
        .await?;
        Ok(())
    }

    /// Records a payment to an employee (advance) or an entrepreneur (expense).
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command)]
    pub async fn expense(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Amount paid"] amount: i64,
        #[description = "What the money was spent on"] category: CategoryChoice,
        #[description = "Employee paid (salary advance)"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: Option<String>,
        #[description = "Entrepreneur paid (external expense)"]
        #[autocomplete = "autocomplete::autocomplete_entrepreneur_name"]
        entrepreneur_name: Option<String>,
        #[description = "Cash or transfer"] payment: Option<PaymentChoice>,
        #[description = "Notes"] notes: Option<String>,
        #[description = "Payment day, YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let db = &ctx.data().database;

        let date = parse_date_or_today(date.as_deref())?;
        let employee_id = match employee_name.as_deref() {
            Some(name) => Some(employee::require_employee_by_name(db, name).await?.id),
            None => None,
        };
        let entrepreneur_id = match entrepreneur_name.as_deref() {
            Some(name) => Some(entrepreneur::require_entrepreneur_by_name(db, name).await?.id),
            None => None,
        };
        let beneficiary = Beneficiary::from_columns(employee_id, entrepreneur_id)?;

        let recorded = advance::record_expense(
            db,
            NewExpense {
                beneficiary,
                date,
                amount,
                category: category.into(),
                payment_method: payment.map(Into::into),
                notes,
            },
        )
        .await?;

        let to = employee_name.or(entrepreneur_name).unwrap_or_default();
        ctx.say(format!(
            "✅ {} of {} paid to {to} on {} (ID: {})",
            recorded.category.label(),
            format_currency(recorded.amount),
            recorded.date,
            recorded.id
        ))
        .await?;
        Ok(())
    }

    /// Pays out an employee's full balance as a final settlement.
    #[poise::command(slash_command)]
    pub async fn settle(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee to settle"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee_name: String,
        #[description = "Cash or transfer"] payment: Option<PaymentChoice>,
        #[description = "Payment day, YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::SettleBalance).await?;
        let db = &ctx.data().database;

        let date = parse_date_or_today(date.as_deref())?;
        let employee = employee::require_employee_by_name(db, &employee_name).await?;
        let settlement =
            advance::settle_employee_balance(db, employee.id, date, payment.map(Into::into))
                .await?;

        ctx.say(format!(
            "✅ {} settled: {} paid on {} (ID: {})",
            employee.name,
            format_currency(settlement.amount),
            settlement.date,
            settlement.id
        ))
        .await?;
        Ok(())
    }

    /// Logs rain on the plantation.
    #[poise::command(slash_command)]
    pub async fn rain(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "How hard it rained"] intensity: IntensityChoice,
        #[description = "Part of the day"] period: PeriodChoice,
        #[description = "Day of the rain, YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let db = &ctx.data().database;

        let date = parse_date_or_today(date.as_deref())?;
        let event = rain::record_rain(db, date, intensity.into(), period.into()).await?;

        ctx.say(format!(
            "🌧️ Rain logged for {} ({intensity:?}, {period:?}) (ID: {})",
            event.date, event.id
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
