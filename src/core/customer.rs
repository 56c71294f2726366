//! Customer business logic - validated construction and lookups.

use crate::{
    core::validate,
    entities::{Customer, customer},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// A validated customer that has not been stored yet.
///
/// Email and contact uniqueness are checked by the store on insert, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    email: String,
    contact: String,
}

impl NewCustomer {
    /// Builds a customer, rejecting an email with neither `'@'` nor `'.'`.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] for a malformed email.
    pub fn new(name: String, email: String, contact: String) -> Result<Self> {
        Ok(Self {
            name,
            email: validate::customer_email(email)?,
            contact,
        })
    }

    /// Converts the draft into an insertable `ActiveModel`.
    #[must_use]
    pub fn into_active_model(self) -> customer::ActiveModel {
        customer::ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            contact: Set(self.contact),
            ..Default::default()
        }
    }
}

/// Retrieves every customer in insertion order.
pub async fn get_all_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One-line listing summary.
#[must_use]
pub fn summary(customer: &customer::Model) -> String {
    format!("Customer: {}, Email: {}", customer.name, customer.email)
}
