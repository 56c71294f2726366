//! Staff business logic.
//!
//! Staff have no field validators; email and contact uniqueness is left to the store.

use crate::{
    entities::{Staff, staff},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// A staff member that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    name: String,
    email: String,
    is_admin: bool,
    contact: String,
}

impl NewStaff {
    /// Builds a staff member. Staff have no field validators.
    #[allow(clippy::unnecessary_wraps)]
    pub fn new(name: String, email: String, is_admin: bool, contact: String) -> Result<Self> {
        Ok(Self {
            name,
            email,
            is_admin,
            contact,
        })
    }

    /// Converts the draft into an insertable `ActiveModel`.
    #[must_use]
    pub fn into_active_model(self) -> staff::ActiveModel {
        staff::ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            is_admin: Set(self.is_admin),
            contact: Set(self.contact),
            ..Default::default()
        }
    }
}

/// Retrieves every staff member in insertion order.
pub async fn get_all_staff(db: &DatabaseConnection) -> Result<Vec<staff::Model>> {
    Staff::find()
        .order_by_asc(staff::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One-line listing summary.
#[must_use]
pub fn summary(member: &staff::Model) -> String {
    format!("Staff: {}, Is Admin: {}", member.name, member.is_admin)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_staff_email_has_no_format_check() -> Result<()> {
        let db = setup_test_db().await?;
        let member = insert_staff(&db, "Sam", "sam", true, "555-0200").await?;

        assert_eq!(member.email, "sam");
        assert_eq!(summary(&member), "Staff: Sam, Is Admin: true");
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_staff_email_is_constraint_violation() -> Result<()> {
        let db = setup_test_db().await?;
        insert_staff(&db, "Sam", "sam@shop.test", false, "555-0200").await?;

        let result = insert_staff(&db, "Samantha", "sam@shop.test", false, "555-0201").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ConstraintViolation { .. }
        ));
        assert_eq!(get_all_staff(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_staff_contact_is_constraint_violation() -> Result<()> {
        let db = setup_test_db().await?;
        insert_staff(&db, "Sam", "sam@shop.test", false, "555-0200").await?;

        let result = insert_staff(&db, "Pat", "pat@shop.test", true, "555-0200").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ConstraintViolation { .. }
        ));
        assert_eq!(get_all_staff(&db).await?.len(), 1);
        Ok(())
    }
}
