//! General Discord commands - ping and help.
//! These commands don't touch the record store.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**AgriPay Help**\n\
        Here is a summary of all available commands.\n\n\
        **Everyone**\n\
        • `/dashboard` - Your balance, or the plantation figures your role allows.\n\
        • `/employee_info [employee]` - Balance and recent activity of an employee.\n\n\
        **Entries (manager, admin)**\n\
        • `/harvest <employee> <weight> [rate] [date]` - Records a harvest.\n\
        • `/propose_rate <employee>` - Shows the rate a new harvest would get.\n\
        • `/task <employee> <description> <amount> [date]` - Records piece work.\n\
        • `/expense <amount> <category> [employee|entrepreneur] ...` - Records a payment.\n\
        • `/settle <employee>` - Pays out an employee's full balance.\n\
        • `/rain <intensity> <period> [date]` - Logs rain.\n\
        • `/journal [date] [month]` - Shows a day, or a month overview.\n\n\
        **Team (manager, admin)**\n\
        • `/employees`, `/add_employee`, `/update_employee`, `/set_status`\n\
        • `/entrepreneurs`, `/add_entrepreneur`\n\n\
        **Administration (admin)**\n\
        • `/settings`, `/update_settings` - Market prices and tariffs.\n\
        • `/delete_record <kind> <id>` - Deletes any record.\n\
        • `/set_role <user> <role> [employee]` - Grants a role.\n\n\
        Dates use the `YYYY-MM-DD` format and default to today.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
