//! Entrepreneur business logic - the registry of external suppliers.

use crate::{
    core::{
        employee::preset_color,
        validation::{optional_text, require_text},
    },
    entities::{Entrepreneur, entrepreneur},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Retrieves every entrepreneur, ordered alphabetically by name.
pub async fn get_all_entrepreneurs(db: &DatabaseConnection) -> Result<Vec<entrepreneur::Model>> {
    Entrepreneur::find()
        .order_by_asc(entrepreneur::Column::Name)
        .order_by_asc(entrepreneur::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an entrepreneur by id.
pub async fn get_entrepreneur_by_id(
    db: &DatabaseConnection,
    entrepreneur_id: i64,
) -> Result<Option<entrepreneur::Model>> {
    Entrepreneur::find_by_id(entrepreneur_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an entrepreneur by exact name.
pub async fn get_entrepreneur_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<entrepreneur::Model>> {
    Entrepreneur::find()
        .filter(entrepreneur::Column::Name.eq(name.trim()))
        .order_by_asc(entrepreneur::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an entrepreneur by exact name, failing with `EntrepreneurNotFound`.
pub async fn require_entrepreneur_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entrepreneur::Model> {
    get_entrepreneur_by_name(db, name)
        .await?
        .ok_or_else(|| Error::EntrepreneurNotFound {
            name: name.to_string(),
        })
}

/// Adds a supplier or contractor, with the next preset color.
///
/// # Errors
/// `DuplicateName` when the name is already registered.
#[instrument(skip(db))]
pub async fn create_entrepreneur(
    db: &DatabaseConnection,
    name: &str,
    specialty: Option<String>,
    phone: Option<String>,
) -> Result<entrepreneur::Model> {
    let name = require_text("Entrepreneur name", name)?;
    if get_entrepreneur_by_name(db, &name).await?.is_some() {
        return Err(Error::DuplicateName {
            kind: "Entrepreneur",
            name,
        });
    }
    let existing = Entrepreneur::find().count(db).await?;

    let entrepreneur = entrepreneur::ActiveModel {
        name: Set(name),
        specialty: Set(optional_text(specialty)),
        phone: Set(optional_text(phone)),
        color: Set(preset_color(existing).to_string()),
        ..Default::default()
    };

    let result = entrepreneur.insert(db).await?;
    info!(entrepreneur_id = result.id, "Entrepreneur '{}' added", result.name);
    Ok(result)
}

/// Deletes an entrepreneur. Their expenses stay in place.
#[instrument(skip(db))]
pub async fn delete_entrepreneur(db: &DatabaseConnection, entrepreneur_id: i64) -> Result<bool> {
    let result = Entrepreneur::delete_by_id(entrepreneur_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_find_entrepreneur() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_entrepreneur(
            &db,
            " Agro Services ",
            Some("Fertilizer".to_string()),
            Some(String::new()),
        )
        .await?;
        assert_eq!(created.name, "Agro Services");
        assert_eq!(created.specialty.as_deref(), Some("Fertilizer"));
        assert_eq!(created.phone, None);

        let found = require_entrepreneur_by_name(&db, "Agro Services").await?;
        assert_eq!(found.id, created.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_entrepreneur_rejects_duplicate_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_entrepreneur(&db, "Transports Yao").await?;

        let result = create_test_entrepreneur(&db, "Transports Yao").await;
        assert!(matches!(
            result,
            Err(Error::DuplicateName { kind: "Entrepreneur", .. })
        ));
        assert_eq!(get_all_entrepreneurs(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_require_entrepreneur_missing() -> Result<()> {
        let db = setup_test_db().await?;
        let result = require_entrepreneur_by_name(&db, "Nobody").await;
        assert!(matches!(result, Err(Error::EntrepreneurNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_entrepreneur_colors_rotate_independently() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_employee(&db, "Kouassi", crate::entities::Crop::Hevea).await?;

        let first = create_test_entrepreneur(&db, "Transports Yao").await?;
        let second = create_test_entrepreneur(&db, "Quincaillerie").await?;

        assert_eq!(first.color, preset_color(0));
        assert_eq!(second.color, preset_color(1));
        assert_eq!(get_all_entrepreneurs(&db).await?.len(), 2);

        Ok(())
    }
}
