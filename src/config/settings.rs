//! Application settings loaded from `stockroom.toml` and the environment.
//!
//! Every key is optional. Built-in defaults are overlaid by the TOML file, which is
//! in turn overlaid by environment variables (a `.env` file is read by `main` before
//! this runs).

use crate::core::RecordKind;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default settings file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "stockroom.toml";

const DEFAULT_DATABASE_URL: &str = "sqlite://stockroom.sqlite?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Seed file per record kind
    pub seeds: SeedPaths,
}

/// Location of the seed file for each record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPaths {
    /// Inventory item seed file
    pub items: PathBuf,
    /// Customer seed file
    pub customers: PathBuf,
    /// Staff seed file
    pub staff: PathBuf,
    /// Transaction seed file
    pub transactions: PathBuf,
}

impl SeedPaths {
    /// Returns the configured seed file for `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Items => &self.items,
            RecordKind::Customers => &self.customers,
            RecordKind::Staff => &self.staff,
            RecordKind::Transactions => &self.transactions,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            seeds: SeedPaths {
                items: PathBuf::from("seeds/items.json"),
                customers: PathBuf::from("seeds/customers.json"),
                staff: PathBuf::from("seeds/staff.json"),
                transactions: PathBuf::from("seeds/transactions.json"),
            },
        }
    }
}

/// Shape of the TOML settings file; everything may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database_url: Option<String>,
    bind_address: Option<String>,
    #[serde(default)]
    seeds: FileSeeds,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSeeds {
    items: Option<PathBuf>,
    customers: Option<PathBuf>,
    staff: Option<PathBuf>,
    transactions: Option<PathBuf>,
}

impl AppConfig {
    fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = file.database_url {
            self.database_url = url;
        }
        if let Some(addr) = file.bind_address {
            self.bind_address = addr;
        }
        let seeds = file.seeds;
        if let Some(p) = seeds.items {
            self.seeds.items = p;
        }
        if let Some(p) = seeds.customers {
            self.seeds.customers = p;
        }
        if let Some(p) = seeds.staff {
            self.seeds.staff = p;
        }
        if let Some(p) = seeds.transactions {
            self.seeds.transactions = p;
        }
    }

    /// Overlays values from `lookup`, which maps an environment variable name to
    /// its value.
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            self.bind_address = addr;
        }
        if let Some(p) = lookup("SEED_ITEMS_PATH") {
            self.seeds.items = p.into();
        }
        if let Some(p) = lookup("SEED_CUSTOMERS_PATH") {
            self.seeds.customers = p.into();
        }
        if let Some(p) = lookup("SEED_STAFF_PATH") {
            self.seeds.staff = p.into();
        }
        if let Some(p) = lookup("SEED_TRANSACTIONS_PATH") {
            self.seeds.transactions = p.into();
        }
    }
}

/// Parses a TOML settings document on top of the defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let file: FileConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })?;
    let mut config = AppConfig::default();
    config.apply_file(file);
    Ok(config)
}

/// Loads settings from `path` if it exists, falling back to defaults otherwise.
///
/// An existing file that cannot be read or parsed is an error.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::debug!("No settings file at {:?}, using defaults", path_ref);
        return Ok(AppConfig::default());
    }
    tracing::debug!("Loading settings from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads the full application configuration.
///
/// The settings file is `$STOCKROOM_CONFIG` if set, otherwise [`DEFAULT_CONFIG_FILE`].
/// Environment variables are applied last.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var("STOCKROOM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let mut config = load_config_file(&path)?;
    config.apply_env(|key| std::env::var(key).ok());
    tracing::info!(
        database_url = %config.database_url,
        bind_address = %config.bind_address,
        "Configuration loaded"
    );
    Ok(config)
}
