//! Route table. Every route is a `GET` with no request body.
//!
//! | route              | action                              |
//! |--------------------|-------------------------------------|
//! | `/`                | connectivity check                  |
//! | `/add_item`        | load the configured item seed file  |
//! | `/add_customer`    | load the configured customer seed file |
//! | `/add_staff`       | load the configured staff seed file |
//! | `/add_transaction` | load the configured transaction seed file |
//! | `/items`, `/customers`, `/staff`, `/transactions` | list records |
//! | `/clear`           | drop and recreate every table       |

use crate::{
    config::database,
    core::{RecordKind, listing, seed},
    errors::Result,
    http::AppState,
};
use axum::{Router, extract::State, routing::get};
use tower_http::trace::TraceLayer;

/// Text returned by `/`.
pub const HOME_MESSAGE: &str = "Connected to database successfully";

/// Builds the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add_item", get(add_items))
        .route("/add_customer", get(add_customers))
        .route("/add_staff", get(add_staff))
        .route("/add_transaction", get(add_transactions))
        .route("/items", get(list_items))
        .route("/customers", get(list_customers))
        .route("/staff", get(list_staff))
        .route("/transactions", get(list_transactions))
        .route("/clear", get(clear))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    HOME_MESSAGE
}

async fn load(state: &AppState, kind: RecordKind) -> Result<String> {
    let path = state.seeds.for_kind(kind);
    let count = seed::load_seed_file(&state.database, kind, path).await?;
    Ok(format!("{} added successfully ({count} records)", kind.label()))
}

async fn add_items(State(state): State<AppState>) -> Result<String> {
    load(&state, RecordKind::Items).await
}

async fn add_customers(State(state): State<AppState>) -> Result<String> {
    load(&state, RecordKind::Customers).await
}

async fn add_staff(State(state): State<AppState>) -> Result<String> {
    load(&state, RecordKind::Staff).await
}

async fn add_transactions(State(state): State<AppState>) -> Result<String> {
    load(&state, RecordKind::Transactions).await
}

async fn list_items(State(state): State<AppState>) -> Result<String> {
    listing::list_records(&state.database, RecordKind::Items).await
}

async fn list_customers(State(state): State<AppState>) -> Result<String> {
    listing::list_records(&state.database, RecordKind::Customers).await
}

async fn list_staff(State(state): State<AppState>) -> Result<String> {
    listing::list_records(&state.database, RecordKind::Staff).await
}

async fn list_transactions(State(state): State<AppState>) -> Result<String> {
    listing::list_records(&state.database, RecordKind::Transactions).await
}

async fn clear(State(state): State<AppState>) -> Result<&'static str> {
    database::reset_store(&state.database).await
}
