//! Customer entity - Email and contact are unique across all customers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Auto-assigned record identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer name
    pub name: String,
    /// Email address, unique
    #[sea_orm(unique, indexed)]
    pub email: String,
    /// Contact string (usually a phone number), unique
    #[sea_orm(unique)]
    pub contact: String,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
