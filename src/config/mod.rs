/// Database configuration and connection management
pub mod database;

/// Default market settings loaded from config.toml
pub mod market;

/// Bootstrap administrator ids from environment variables
pub mod users;
