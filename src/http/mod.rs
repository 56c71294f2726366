//! HTTP layer - axum router, handlers and error rendering.
//!
//! Handlers are thin: each one pulls the store handle out of [`AppState`] and
//! calls into [`crate::core`] or [`crate::config::database`].

/// Error to response conversion
pub mod error;
/// Route table and handlers
pub mod routes;

use crate::config::SeedPaths;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared state available to every handler.
///
/// Cloned per request; the connection and seed paths are shared behind `Arc`s.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection for all store operations
    pub database: Arc<DatabaseConnection>,
    /// Configured seed file locations
    pub seeds: Arc<SeedPaths>,
}

impl AppState {
    /// Creates a new `AppState` from a connection and the configured seed paths.
    #[must_use]
    pub fn new(database: DatabaseConnection, seeds: SeedPaths) -> Self {
        Self {
            database: Arc::new(database),
            seeds: Arc::new(seeds),
        }
    }
}

pub use routes::router;
