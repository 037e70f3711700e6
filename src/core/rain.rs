//! Rain log business logic.

use crate::{
    entities::{RainEvent, RainIntensity, RainPeriod, rain_event},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Logs a rain event.
#[instrument(skip(db))]
pub async fn record_rain(
    db: &DatabaseConnection,
    date: NaiveDate,
    intensity: RainIntensity,
    period: RainPeriod,
) -> Result<rain_event::Model> {
    let event = rain_event::ActiveModel {
        date: Set(date),
        intensity: Set(intensity),
        period: Set(period),
        ..Default::default()
    };
    let result = event.insert(db).await?;
    info!(rain_event_id = result.id, %date, "Rain logged");
    Ok(result)
}

/// Retrieves the rain log, newest first.
pub async fn get_all_rain_events(db: &DatabaseConnection) -> Result<Vec<rain_event::Model>> {
    RainEvent::find()
        .order_by_desc(rain_event::Column::Date)
        .order_by_desc(rain_event::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a rain event. Returns `true` when a row was removed.
#[instrument(skip(db))]
pub async fn delete_rain_event(db: &DatabaseConnection, rain_event_id: i64) -> Result<bool> {
    let result = RainEvent::delete_by_id(rain_event_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
