//! Dashboard Discord commands - `dashboard` and `propose_rate`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, authorize, handlers::autocomplete},
        core::{
            access::Action,
            dashboard::{Dashboard, Headline, build_dashboard},
            employee,
            ledger::{market_price_for, propose_harvest_rate},
            report::{calculate_share, format_balance, format_currency, format_share_bar, format_weight},
            settings,
            snapshot::load_snapshot,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    fn headline_field(headline: &Headline) -> (String, String) {
        match headline {
            Headline::OwnBalance { name, due } => {
                (format!("Balance of {name}"), format_balance(*due))
            }
            Headline::GrossWorkerPay(amount) => {
                ("Gross worker pay".to_string(), format_currency(*amount))
            }
            Headline::Profit(amount) => ("Profit".to_string(), format_currency(*amount)),
        }
    }

    fn dashboard_embed(view: &Dashboard) -> Result<serenity::CreateEmbed> {
        let (title, value) = headline_field(&view.headline);
        let mut fields = vec![(title, format!("**{value}**"), false)];

        if let Some(finances) = &view.finances {
            fields.push((
                "Gross revenue".to_string(),
                format_currency(finances.gross_revenue),
                true,
            ));
        }

        if let Some(payroll) = &view.payroll {
            fields.push((
                "Already paid to workers".to_string(),
                format_currency(payroll.already_paid_to_workers),
                true,
            ));
            fields.push((
                "Net due to workers".to_string(),
                format_currency(payroll.net_due_to_workers),
                true,
            ));
            fields.push((
                "External expenses".to_string(),
                format_currency(payroll.external_expenses),
                true,
            ));

            let total_weight: f64 = payroll.volumes.iter().map(|v| v.weight).sum();
            let mut volumes = String::new();
            for volume in &payroll.volumes {
                let share = calculate_share(volume.weight, total_weight);
                writeln!(
                    volumes,
                    "{}: {} {}",
                    volume.crop.label(),
                    format_weight(volume.weight),
                    format_share_bar(share, Some(10))
                )?;
            }
            fields.push(("Harvest volume".to_string(), volumes, false));

            let mut due = String::new();
            if payroll.due.is_empty() {
                due.push_str("Everyone is settled.");
            }
            for (name, amount) in &payroll.due {
                writeln!(due, "• {name}: {}", format_currency(*amount))?;
            }
            fields.push(("Employees owed".to_string(), due, false));

            let mut expenses = String::new();
            if payroll.recent_expenses.is_empty() {
                expenses.push_str("No external expenses yet.");
            }
            for line in &payroll.recent_expenses {
                writeln!(
                    expenses,
                    "{} | {} | {} | {}",
                    line.date,
                    line.beneficiary,
                    line.category.label(),
                    format_currency(line.amount)
                )?;
            }
            fields.push(("Recent external expenses".to_string(), expenses, false));
        }

        Ok(serenity::CreateEmbed::default()
            .title("🌿 Plantation dashboard")
            .color(0x0016_a34a)
            .fields(fields))
    }

    /// Shows the dashboard your role allows: your balance, payroll, or profit.
    #[poise::command(slash_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let caller = authorize(ctx, Action::ViewDashboard).await?;
        let snapshot = load_snapshot(&ctx.data().database).await?;
        let view = build_dashboard(&caller, &snapshot);

        ctx.send(poise::CreateReply::default().embed(dashboard_embed(&view)?))
            .await?;
        Ok(())
    }

    /// Shows the pay rate a new harvest would get for an employee.
    #[poise::command(slash_command)]
    pub async fn propose_rate(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Employee harvesting"]
        #[autocomplete = "autocomplete::autocomplete_active_employee_name"]
        employee_name: String,
    ) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let db = &ctx.data().database;

        let employee = employee::require_employee_by_name(db, &employee_name).await?;
        let market = settings::get_market_settings(db).await?;
        let rate = propose_harvest_rate(&employee, &market);

        ctx.say(format!(
            "💡 Proposed rate for {} ({}): **{}/kg** (market price {}/kg)",
            employee.name,
            employee.crop.label(),
            format_currency(rate),
            format_currency(market_price_for(employee.crop, &market))
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
