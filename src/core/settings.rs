//! Market settings business logic.
//!
//! A single row (id 1) holds the current prices. When it has never been saved
//! the defaults apply.

use crate::{
    entities::{Settings, settings, settings::SETTINGS_ROW_ID},
    errors::Result,
    models::MarketSettings,
};
use sea_orm::{Set, prelude::*};
use tracing::{info, instrument};

/// Current market settings, or the defaults when none were saved.
pub async fn get_market_settings(db: &DatabaseConnection) -> Result<MarketSettings> {
    Ok(Settings::find_by_id(SETTINGS_ROW_ID)
        .one(db)
        .await?
        .map(MarketSettings::from)
        .unwrap_or_default())
}

fn active_model(values: MarketSettings) -> settings::ActiveModel {
    settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        pay_rate_hevea: Set(values.pay_rate_hevea),
        pay_rate_cacao: Set(values.pay_rate_cacao),
        market_price_hevea: Set(values.market_price_hevea),
        market_price_cacao: Set(values.market_price_cacao),
        cacao_pay_ratio: Set(values.cacao_pay_ratio),
        updated_at: Set(chrono::Utc::now()),
    }
}

/// Replaces the market settings.
///
/// Stored harvests keep the pay rate they were entered with; only proposals
/// and revenue valuation change.
///
/// # Errors
/// `InvalidPayRate` / `InvalidPayRatio` when a value is out of range.
#[instrument(skip(db))]
pub async fn update_market_settings(
    db: &DatabaseConnection,
    values: MarketSettings,
) -> Result<MarketSettings> {
    values.validate()?;

    let row = if Settings::find_by_id(SETTINGS_ROW_ID).one(db).await?.is_some() {
        active_model(values).update(db).await?
    } else {
        active_model(values).insert(db).await?
    };

    info!(
        pay_rate_hevea = row.pay_rate_hevea,
        market_price_hevea = row.market_price_hevea,
        market_price_cacao = row.market_price_cacao,
        cacao_pay_ratio = row.cacao_pay_ratio,
        "Market settings updated"
    );
    Ok(MarketSettings::from(row))
}

/// Writes the initial settings row unless one already exists.
///
/// Returns the settings now in effect.
#[instrument(skip(db))]
pub async fn seed_market_settings(
    db: &DatabaseConnection,
    initial: MarketSettings,
) -> Result<MarketSettings> {
    if let Some(existing) = Settings::find_by_id(SETTINGS_ROW_ID).one(db).await? {
        return Ok(MarketSettings::from(existing));
    }

    initial.validate()?;
    let row = active_model(initial).insert(db).await?;
    info!("Market settings seeded");
    Ok(MarketSettings::from(row))
}
