//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the `AgriPay` application,
//! including all slash commands, autocomplete handlers, and bot context management.

/// Slash-command choice lists mapped onto domain enums
pub mod choices;
/// Discord command implementations (entries, team, dashboard, journal, settings, admin)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    core::access::{self, Action, Caller},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands.
/// This structure holds the database connection and the bootstrap
/// administrator list that role resolution needs.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// User ids that are always ADMIN
    pub admin_user_ids: Vec<String>,
}

impl BotData {
    /// Creates a new `BotData` instance with the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection, admin_user_ids: Vec<String>) -> Self {
        Self {
            database,
            admin_user_ids,
        }
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Resolves the command author and checks that they may perform `action`.
///
/// # Errors
/// `UnknownUser` or `PermissionDenied`, reported to the user by the framework error handler.
pub async fn authorize(ctx: Context<'_>, action: Action) -> Result<Caller> {
    let data = ctx.data();
    let user_id = ctx.author().id.to_string();
    let caller = access::resolve_role(&data.database, &user_id, &data.admin_user_ids).await?;
    caller.authorize(action)?;
    Ok(caller)
}

/// Reports command failures to the user.
///
/// Store failures get a generic retry notice; every other error is a message the
/// user can act on.
async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let message = if error.is_retryable() {
                error!("Error in command `{}`: {error:?}", ctx.command().name);
                "❌ The record store is unavailable right now. Please try again.".to_string()
            } else {
                warn!("Command `{}` refused: {error}", ctx.command().name);
                format!("❌ {error}")
            };
            if let Err(e) = ctx.say(message).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Starts the Discord client and blocks until it stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;
    Ok(())
}
