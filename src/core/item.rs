//! Inventory item business logic - validated construction and lookups.

use crate::{
    core::validate,
    entities::{InventoryItem, inventory_item},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// A validated inventory item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    sku: String,
    name: String,
    description: Option<String>,
    price: i64,
    quantity: i64,
}

impl NewItem {
    /// Builds an item, rejecting a negative price or quantity.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] naming the first offending field.
    pub fn new(
        sku: String,
        name: String,
        description: Option<String>,
        price: i64,
        quantity: i64,
    ) -> Result<Self> {
        Ok(Self {
            sku,
            name,
            description,
            price: validate::non_negative("price", price)?,
            quantity: validate::non_negative("quantity", quantity)?,
        })
    }

    /// Converts the draft into an insertable `ActiveModel`.
    #[must_use]
    pub fn into_active_model(self) -> inventory_item::ActiveModel {
        inventory_item::ActiveModel {
            sku: Set(self.sku),
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            quantity: Set(self.quantity),
            ..Default::default()
        }
    }
}

/// Retrieves every inventory item in insertion order.
pub async fn get_all_items(db: &DatabaseConnection) -> Result<Vec<inventory_item::Model>> {
    InventoryItem::find()
        .order_by_asc(inventory_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds the first item (lowest id) carrying `sku`.
///
/// SKUs are not unique, so later duplicates are never returned.
pub async fn get_item_by_sku(
    db: &DatabaseConnection,
    sku: &str,
) -> Result<Option<inventory_item::Model>> {
    InventoryItem::find()
        .filter(inventory_item::Column::Sku.eq(sku))
        .order_by_asc(inventory_item::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// One-line listing summary.
#[must_use]
pub fn summary(item: &inventory_item::Model) -> String {
    format!(
        "Name: {}, Price: {}, Qty: {}",
        item.name, item.price, item.quantity
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    fn widget(price: i64, quantity: i64) -> Result<NewItem> {
        NewItem::new(
            "W-1".to_string(),
            "Widget".to_string(),
            None,
            price,
            quantity,
        )
    }

    #[test]
    fn test_new_item_validation() {
        assert!(widget(0, 0).is_ok());
        assert!(widget(1999, 12).is_ok());

        assert!(matches!(
            widget(-1, 5).unwrap_err(),
            Error::Validation { field: "price", .. }
        ));
        assert!(matches!(
            widget(10, -5).unwrap_err(),
            Error::Validation {
                field: "quantity",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_insert_and_list_items() -> Result<()> {
        let db = setup_test_db().await?;

        insert_item(&db, "A-1", "Anvil", 100, 3).await?;
        insert_item(&db, "B-2", "Bellows", 40, 0).await?;

        let items = get_all_items(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Anvil");
        assert_eq!(items[1].name, "Bellows");
        assert_eq!(items[1].quantity, 0);
        assert_eq!(summary(&items[0]), "Name: Anvil, Price: 100, Qty: 3");

        Ok(())
    }

    #[tokio::test]
    async fn test_sku_is_not_unique_and_lookup_returns_first() -> Result<()> {
        let db = setup_test_db().await?;

        let first = insert_item(&db, "DUP", "First", 1, 1).await?;
        insert_item(&db, "DUP", "Second", 2, 2).await?;

        let found = get_item_by_sku(&db, "DUP").await?.unwrap();
        assert_eq!(found.id, first.id);
        assert!(get_item_by_sku(&db, "MISSING").await?.is_none());

        Ok(())
    }
}
