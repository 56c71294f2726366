//! Staff entity - Employees who record transactions.
//!
//! Email and contact are unique. Unlike customers, staff email has no format check.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Auto-assigned record identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Staff member name
    pub name: String,
    /// Email address, unique
    #[sea_orm(unique)]
    pub email: String,
    /// Whether this staff member has admin rights
    pub is_admin: bool,
    /// Contact string, unique
    #[sea_orm(unique)]
    pub contact: String,
}

/// Defines relationships between Staff and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One staff member records many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
