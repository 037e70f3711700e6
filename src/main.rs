use agripay::{
    bot::{self, BotData},
    config::{self, database},
    core::settings::seed_market_settings,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load config.toml (market defaults for a fresh database)
    let app_config = config::market::load_default_config()
        .inspect_err(|e| error!("Critical error loading configuration: {e}"))?;
    let initial_settings = app_config.initial_market_settings()?;

    // 4. Connect and make sure every table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;

    // 5. Seed the settings row on first start
    let settings = seed_market_settings(&db, initial_settings).await?;
    info!(
        pay_rate_hevea = settings.pay_rate_hevea,
        market_price_cacao = settings.market_price_cacao,
        "Market settings in effect"
    );

    // 6. Bootstrap administrators
    let admin_user_ids = config::users::get_admin_user_ids();
    if admin_user_ids.is_empty() {
        info!("AGRIPAY_ADMIN_USER_IDS is empty; only existing profiles can use the bot");
    }

    // 7. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(db, admin_user_ids)).await
}
