//! Database configuration module for Stockroom.
//!
//! This module handles the `SQLite` connection and table lifecycle using `SeaORM`.
//! Tables and indexes are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models
//! without hand-written SQL.

use crate::entities::{Customer, InventoryItem, Staff, Transaction};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, sea_query::Table,
};
use tracing::{info, warn};

/// Confirmation text returned by [`reset_store`].
pub const RESET_CONFIRMATION: &str = "Database reset";

/// Establishes a connection pool to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates every table and index that does not exist yet.
///
/// Safe to run on every startup. Parents are created before `transactions` so its
/// foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, InventoryItem).await?;
    create_table(db, Customer).await?;
    create_table(db, Staff).await?;
    create_table(db, Transaction).await?;
    info!("Schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(builder.build(&index)).await?;
    }
    Ok(())
}

/// Drops every table and recreates the schema, destroying all records.
///
/// `transactions` is dropped first because it references customers and staff.
pub async fn reset_store(db: &DatabaseConnection) -> Result<&'static str> {
    let builder = db.get_database_backend();

    let drops = [
        Table::drop().table(Transaction).if_exists().to_owned(),
        Table::drop().table(Staff).if_exists().to_owned(),
        Table::drop().table(Customer).if_exists().to_owned(),
        Table::drop().table(InventoryItem).if_exists().to_owned(),
    ];
    for statement in &drops {
        db.execute(builder.build(statement)).await?;
    }
    warn!("All tables dropped");

    create_tables(db).await?;
    Ok(RESET_CONFIRMATION)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{CustomerModel, InventoryItemModel, StaffModel, TransactionModel};
    use crate::test_utils::{insert_customer, insert_item, insert_staff, insert_transaction};
    use sea_orm::{PaginatorTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<InventoryItemModel> = InventoryItem::find().limit(1).all(&db).await?;
        let _: Vec<CustomerModel> = Customer::find().limit(1).all(&db).await?;
        let _: Vec<StaffModel> = Staff::find().limit(1).all(&db).await?;
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        assert_eq!(Customer::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_store_empties_every_table() -> Result<()> {
        let db = crate::test_utils::setup_seeded_db().await?;
        assert!(Transaction::find().count(&db).await? > 0);

        let message = reset_store(&db).await?;
        assert_eq!(message, RESET_CONFIRMATION);

        assert_eq!(InventoryItem::find().count(&db).await?, 0);
        assert_eq!(Customer::find().count(&db).await?, 0);
        assert_eq!(Staff::find().count(&db).await?, 0);
        assert_eq!(Transaction::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_file_backed_store() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("stock.db").display());
        let db = create_connection(&url).await?;
        create_tables(&db).await?;

        let ann = insert_customer(&db, "Ann", "ann@example.com", "555-0100").await?;
        let sam = insert_staff(&db, "Sam", "sam@shop.test", true, "555-0200").await?;
        insert_item(&db, "A-1", "Anvil", 100, 3).await?;
        insert_transaction(&db, ann.id, sam.id, "A-1", 100, "sale").await?;

        reset_store(&db).await?;

        assert!(crate::core::item::get_all_items(&db).await?.is_empty());
        assert!(crate::core::customer::get_all_customers(&db).await?.is_empty());
        assert!(crate::core::staff::get_all_staff(&db).await?.is_empty());
        assert!(crate::core::transaction::get_all_transactions(&db).await?.is_empty());

        db.close().await?;
        Ok(())
    }
}
