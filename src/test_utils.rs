//! Shared test utilities for Stockroom.
//!
//! This module provides helpers for setting up in-memory test databases, inserting
//! records with sensible defaults, and writing temporary seed files.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        customer::NewCustomer, item::NewItem, staff::NewStaff, transaction::NewTransaction,
    },
    entities,
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a database holding one record of every kind:
/// item `Anvil`, customer `Ann`, admin staff `Sam`, and one sale of 100.
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    insert_item(&db, "A-1", "Anvil", 100, 3).await?;
    let ann = insert_customer(&db, "Ann", "ann@example.com", "555-0100").await?;
    let sam = insert_staff(&db, "Sam", "sam@shop.test", true, "555-0200").await?;
    insert_transaction(&db, ann.id, sam.id, "A-1", 100, "sale").await?;
    Ok(db)
}

/// Inserts an inventory item with no description.
pub async fn insert_item(
    db: &DatabaseConnection,
    sku: &str,
    name: &str,
    price: i64,
    quantity: i64,
) -> Result<entities::inventory_item::Model> {
    let draft = NewItem::new(sku.to_string(), name.to_string(), None, price, quantity)?;
    Ok(draft.into_active_model().insert(db).await?)
}

/// Inserts a customer.
pub async fn insert_customer(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    contact: &str,
) -> Result<entities::customer::Model> {
    let draft = NewCustomer::new(name.to_string(), email.to_string(), contact.to_string())?;
    Ok(draft.into_active_model().insert(db).await?)
}

/// Inserts a staff member.
pub async fn insert_staff(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    is_admin: bool,
    contact: &str,
) -> Result<entities::staff::Model> {
    let draft = NewStaff::new(
        name.to_string(),
        email.to_string(),
        is_admin,
        contact.to_string(),
    )?;
    Ok(draft.into_active_model().insert(db).await?)
}

/// Inserts a transaction stamped with the current time.
pub async fn insert_transaction(
    db: &DatabaseConnection,
    customer_id: i64,
    staff_id: i64,
    sku: &str,
    amount: i64,
    category: &str,
) -> Result<entities::transaction::Model> {
    let draft = NewTransaction::new(
        customer_id,
        staff_id,
        sku.to_string(),
        amount,
        category.to_string(),
    )?;
    Ok(draft.into_active_model().insert(db).await?)
}

/// Writes `value` as JSON to a temporary file that is removed when dropped.
pub fn write_seed_file(value: &serde_json::Value) -> NamedTempFile {
    write_raw_seed_file(&value.to_string())
}

/// Writes `contents` verbatim to a temporary file that is removed when dropped.
pub fn write_raw_seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
