//! Transaction entity - A sale or other movement recorded by staff for a customer.
//!
//! Each transaction has a `customer_id`, `staff_id`, the `item_sku` of the item
//! involved, a UTC `timestamp`, an integer `amount` and a free-form `category`.
//! Customer and staff are real foreign keys; `item_sku` is a plain column because
//! SKUs are not unique.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Auto-assigned record identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the customer involved
    pub customer_id: i64,
    /// ID of the staff member who recorded it
    pub staff_id: i64,
    /// SKU of the inventory item involved
    #[sea_orm(indexed)]
    pub item_sku: String,
    /// When the transaction was created
    pub timestamp: DateTimeUtc,
    /// Transaction amount
    pub amount: i64,
    /// Category label (e.g. `"sale"`, `"refund"`)
    pub category: String,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// Each transaction belongs to one staff member
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
