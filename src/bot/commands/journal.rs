//! Journal Discord command - one day in detail, or a month at a glance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, authorize},
        core::{
            access::Action,
            journal::{day_journal, month_activity},
            report::{format_currency, format_weight},
            snapshot::load_snapshot,
            validation::{parse_date, parse_date_or_today},
        },
        errors::{Error, Result},
        models::LedgerSnapshot,
    };
    use chrono::{Datelike, NaiveDate};
    use std::fmt::Write;

    fn render_day(date: NaiveDate, snapshot: &LedgerSnapshot) -> Result<String> {
        let journal = day_journal(date, snapshot);
        let mut out = format!("📒 **Journal for {date}**\n");
        if journal.is_empty() {
            out.push_str("Nothing recorded.");
            return Ok(out);
        }

        for event in &journal.rain_events {
            writeln!(out, "🌧️ {:?} rain ({:?})", event.intensity, event.period)?;
        }
        for h in &journal.harvests {
            writeln!(
                out,
                "🌿 #{} {}: {} {} @ {}",
                h.id,
                snapshot.employee_name(h.employee_id),
                format_weight(h.weight),
                h.crop.label(),
                format_currency(h.pay_rate)
            )?;
        }
        for t in &journal.work_tasks {
            writeln!(
                out,
                "🛠️ #{} {}: {} {}",
                t.id,
                snapshot.employee_name(t.employee_id),
                t.description,
                format_currency(t.amount)
            )?;
        }
        for a in &journal.advances {
            writeln!(
                out,
                "💸 #{} {}: {} {}",
                a.id,
                snapshot.beneficiary_name(a.beneficiary),
                a.category.label(),
                format_currency(a.amount)
            )?;
        }
        Ok(out)
    }

    fn render_month(first: NaiveDate, snapshot: &LedgerSnapshot) -> Result<String> {
        let days = month_activity(first.year(), first.month(), snapshot);
        let mut out = format!("🗓️ **{}**\n", first.format("%B %Y"));
        if days.is_empty() {
            out.push_str("Nothing recorded this month.");
        }
        for day in days {
            write!(
                out,
                "`{}` harvests {} | tasks {} | payments {}",
                day.date, day.harvests, day.work_tasks, day.advances
            )?;
            if day.rained {
                out.push_str(" | 🌧️");
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Shows what was recorded on a day, or a month overview.
    #[poise::command(slash_command)]
    pub async fn journal(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Day, YYYY-MM-DD (defaults to today)"] date: Option<String>,
        #[description = "Month overview instead, YYYY-MM"] month: Option<String>,
    ) -> Result<()> {
        authorize(ctx, Action::ViewPayroll).await?;
        let snapshot = load_snapshot(&ctx.data().database).await?;

        let response = match month {
            Some(month) => {
                let first = parse_date(&format!("{}-01", month.trim()))?;
                render_month(first, &snapshot)?
            }
            None => render_day(parse_date_or_today(date.as_deref())?, &snapshot)?,
        };

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
