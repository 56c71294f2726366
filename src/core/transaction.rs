//! Transaction business logic - construction, listing and the item lookup.
//!
//! A transaction references its customer and staff member by primary key, but its
//! inventory item by SKU. Because SKUs are not unique, [`item_for_transaction`]
//! resolves the reference to the first item carrying that SKU.

use crate::{
    core::item,
    entities::{Transaction, inventory_item, transaction},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

/// A transaction that has not been stored yet.
///
/// The timestamp is fixed when the draft is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    customer_id: i64,
    staff_id: i64,
    item_sku: String,
    timestamp: DateTimeUtc,
    amount: i64,
    category: String,
}

impl NewTransaction {
    /// Builds a transaction stamped with the current time.
    ///
    /// Unknown customer or staff ids are rejected by the store's foreign keys on insert.
    #[allow(clippy::unnecessary_wraps)]
    pub fn new(
        customer_id: i64,
        staff_id: i64,
        item_sku: String,
        amount: i64,
        category: String,
    ) -> Result<Self> {
        Ok(Self {
            customer_id,
            staff_id,
            item_sku,
            timestamp: Utc::now(),
            amount,
            category,
        })
    }

    /// Converts the draft into an insertable `ActiveModel`.
    #[must_use]
    pub fn into_active_model(self) -> transaction::ActiveModel {
        transaction::ActiveModel {
            customer_id: Set(self.customer_id),
            staff_id: Set(self.staff_id),
            item_sku: Set(self.item_sku),
            timestamp: Set(self.timestamp),
            amount: Set(self.amount),
            category: Set(self.category),
            ..Default::default()
        }
    }
}

/// Retrieves every transaction in insertion order.
pub async fn get_all_transactions(db: &DatabaseConnection) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Resolves the inventory item a transaction refers to through its SKU.
pub async fn item_for_transaction(
    db: &DatabaseConnection,
    txn: &transaction::Model,
) -> Result<Option<inventory_item::Model>> {
    item::get_item_by_sku(db, &txn.item_sku).await
}

/// One-line listing summary.
#[must_use]
pub fn summary(txn: &transaction::Model) -> String {
    format!(
        "Transaction ID: {}, Amount: {}, Date: {}",
        txn.id,
        txn.amount,
        txn.timestamp.format("%Y-%m-%d %H:%M:%S%.6f")
    )
}
