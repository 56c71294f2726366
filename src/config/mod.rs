/// Database connection, schema creation and store reset
pub mod database;

/// Application settings from `stockroom.toml` and environment variables
pub mod settings;

pub use settings::{AppConfig, SeedPaths, load_app_configuration};
