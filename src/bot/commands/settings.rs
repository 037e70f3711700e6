//! Settings Discord commands - `settings` and `update_settings`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, authorize},
        core::{
            access::Action,
            ledger::propose_rate_for_crop,
            report::format_currency,
            settings::{get_market_settings, update_market_settings},
        },
        entities::Crop,
        errors::{Error, Result},
        models::MarketSettings,
    };

    fn render(settings: &MarketSettings) -> String {
        format!(
            "**Market settings**\n\
            • Hevea tariff: {}/kg\n\
            • Hevea market price: {}/kg\n\
            • Cacao market price: {}/kg\n\
            • Cacao pay ratio: {:.4} (proposed cacao rate {}/kg)",
            format_currency(settings.pay_rate_hevea),
            format_currency(settings.market_price_hevea),
            format_currency(settings.market_price_cacao),
            settings.cacao_pay_ratio,
            format_currency(propose_rate_for_crop(Crop::Cacao, settings)),
        )
    }

    /// Shows the current market prices and tariffs.
    #[poise::command(slash_command)]
    pub async fn settings(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        authorize(ctx, Action::RecordEntries).await?;
        let current = get_market_settings(&ctx.data().database).await?;
        ctx.say(render(&current)).await?;
        Ok(())
    }

    /// Changes market prices and tariffs. Stored harvest rates are not touched.
    #[poise::command(slash_command)]
    pub async fn update_settings(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Hevea tariff paid per kg"] pay_rate_hevea: Option<i64>,
        #[description = "Hevea market price per kg"] market_price_hevea: Option<i64>,
        #[description = "Cacao market price per kg"] market_price_cacao: Option<i64>,
        #[description = "Share of the cacao price paid to workers, e.g. 0.3333"]
        cacao_pay_ratio: Option<f64>,
    ) -> Result<()> {
        authorize(ctx, Action::EditSettings).await?;
        let db = &ctx.data().database;

        let current = get_market_settings(db).await?;
        let updated = update_market_settings(
            db,
            MarketSettings {
                pay_rate_hevea: pay_rate_hevea.unwrap_or(current.pay_rate_hevea),
                market_price_hevea: market_price_hevea.unwrap_or(current.market_price_hevea),
                market_price_cacao: market_price_cacao.unwrap_or(current.market_price_cacao),
                cacao_pay_ratio: cacao_pay_ratio.unwrap_or(current.cacao_pay_ratio),
                ..current
            },
        )
        .await?;

        ctx.say(format!("✅ Settings updated.\n{}", render(&updated)))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
