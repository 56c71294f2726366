//! Inventory item entity - A stocked item with a price and on-hand quantity.
//!
//! The `sku` column is indexed but deliberately not unique. Transactions refer
//! to items through it, see [`crate::core::transaction::item_for_transaction`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Auto-assigned record identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Stock-keeping unit
    #[sea_orm(indexed)]
    pub sku: String,
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, never negative
    pub price: i64,
    /// Quantity on hand, never negative
    pub quantity: i64,
}

/// `InventoryItem` has no declared relationships; transactions reach it by SKU lookup
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
