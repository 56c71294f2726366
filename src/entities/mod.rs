//! Entity module - Contains all SeaORM entity definitions for the record store.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod customer;
pub mod inventory_item;
pub mod staff;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel,
};
pub use staff::{Column as StaffColumn, Entity as Staff, Model as StaffModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
