//! Bulk loader - Populates one record kind from a JSON seed file.
//!
//! A seed file is a JSON array of objects whose keys are fixed per kind:
//!
//! | kind         | keys                                          |
//! |--------------|-----------------------------------------------|
//! | items        | `SKU`, `Name`, `Price`, `Quantity`, `Description` |
//! | customers    | `Name`, `Email`, `Contact`                    |
//! | staff        | `Name`, `Email`, `Contact`, `Admin`           |
//! | transactions | `Staff`, `Customer`, `SKU`, `Amount`, `Category` |
//!
//! Loading is all-or-nothing. Every entry is converted and validated before the
//! store is touched, then the whole batch is inserted in a single database
//! transaction that is committed once or rolled back on the first failure.

use crate::{
    core::{
        RecordKind, customer::NewCustomer, item::NewItem, staff::NewStaff,
        transaction::NewTransaction,
    },
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait,
};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info, warn};

type Entry = Map<String, Value>;

/// Loads every entry of the seed file at `path` as records of `kind`.
///
/// Returns the number of records committed.
///
/// # Errors
/// - [`Error::NotFound`] if `path` does not exist
/// - [`Error::Parse`] if the file is not a JSON array of objects, or a field has the wrong type
/// - [`Error::MissingField`] if an entry lacks a required key
/// - [`Error::Validation`] if an entry fails its record's validators
/// - [`Error::ConstraintViolation`] if the store rejects a row; nothing from the file is kept
pub async fn load_seed_file(
    db: &DatabaseConnection,
    kind: RecordKind,
    path: &Path,
) -> Result<usize> {
    let entries = read_entries(path).await?;
    debug!(kind = %kind, entries = entries.len(), "Seed file parsed");

    let source = path.display().to_string();
    let count = match kind {
        RecordKind::Items => {
            let rows = build_rows(&entries, &source, item_from_entry)?;
            insert_batch(db, rows).await?
        }
        RecordKind::Customers => {
            let rows = build_rows(&entries, &source, customer_from_entry)?;
            insert_batch(db, rows).await?
        }
        RecordKind::Staff => {
            let rows = build_rows(&entries, &source, staff_from_entry)?;
            insert_batch(db, rows).await?
        }
        RecordKind::Transactions => {
            let rows = build_rows(&entries, &source, transaction_from_entry)?;
            insert_batch(db, rows).await?
        }
    };

    info!(kind = %kind, count, "{} added to database successfully", kind.label());
    Ok(count)
}

async fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::Parse {
        path: path.display().to_string(),
        message: format!("expected a JSON array of objects: {e}"),
    })
}

fn build_rows<A, F>(entries: &[Entry], source: &str, convert: F) -> Result<Vec<A>>
where
    F: Fn(&Fields<'_>) -> Result<A>,
{
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            convert(&Fields {
                index,
                entry,
                source,
            })
        })
        .collect()
}

async fn insert_batch<A>(db: &DatabaseConnection, rows: Vec<A>) -> Result<usize>
where
    A: ActiveModelTrait + Send,
{
    let count = rows.len();
    let txn = db.begin().await?;

    match insert_rows(&txn, rows).await {
        Ok(()) => {
            txn.commit().await?;
            Ok(count)
        }
        Err(e) => {
            if let Err(rollback) = txn.rollback().await {
                warn!("Rollback after failed insert also failed: {}", rollback);
            }
            Err(e)
        }
    }
}

async fn insert_rows<A>(txn: &DatabaseTransaction, rows: Vec<A>) -> Result<()>
where
    A: ActiveModelTrait + Send,
{
    for row in rows {
        <A::Entity as EntityTrait>::insert(row).exec(txn).await?;
    }
    Ok(())
}

fn item_from_entry(fields: &Fields<'_>) -> Result<crate::entities::inventory_item::ActiveModel> {
    NewItem::new(
        fields.text("SKU")?,
        fields.string("Name")?,
        fields.optional_string("Description")?,
        fields.integer("Price")?,
        fields.integer("Quantity")?,
    )
    .map(NewItem::into_active_model)
}

fn customer_from_entry(fields: &Fields<'_>) -> Result<crate::entities::customer::ActiveModel> {
    NewCustomer::new(
        fields.string("Name")?,
        fields.string("Email")?,
        fields.text("Contact")?,
    )
    .map(NewCustomer::into_active_model)
}

fn staff_from_entry(fields: &Fields<'_>) -> Result<crate::entities::staff::ActiveModel> {
    NewStaff::new(
        fields.string("Name")?,
        fields.string("Email")?,
        fields.boolean("Admin")?,
        fields.text("Contact")?,
    )
    .map(NewStaff::into_active_model)
}

fn transaction_from_entry(
    fields: &Fields<'_>,
) -> Result<crate::entities::transaction::ActiveModel> {
    NewTransaction::new(
        fields.integer("Customer")?,
        fields.integer("Staff")?,
        fields.text("SKU")?,
        fields.integer("Amount")?,
        fields.string("Category")?,
    )
    .map(NewTransaction::into_active_model)
}

/// Typed access to one seed entry. `null` counts as missing.
struct Fields<'a> {
    index: usize,
    entry: &'a Entry,
    source: &'a str,
}

impl Fields<'_> {
    fn get(&self, key: &'static str) -> Option<&Value> {
        self.entry.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &'static str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::MissingField {
            index: self.index,
            field: key,
        })
    }

    fn wrong_type(&self, key: &str, expected: &str, found: &Value) -> Error {
        Error::Parse {
            path: self.source.to_string(),
            message: format!(
                "entry {}: `{key}` must be {expected}, found {found}",
                self.index
            ),
        }
    }

    fn string(&self, key: &'static str) -> Result<String> {
        let value = self.require(key)?;
        value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| self.wrong_type(key, "a string", value))
    }

    fn optional_string(&self, key: &'static str) -> Result<Option<String>> {
        self.get(key)
            .map(|value| {
                value
                    .as_str()
                    .map(ToString::to_string)
                    .ok_or_else(|| self.wrong_type(key, "a string", value))
            })
            .transpose()
    }

    /// A string, or an integer rendered as decimal text.
    fn text(&self, key: &'static str) -> Result<String> {
        let value = self.require(key)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            other => Err(self.wrong_type(key, "a string or integer", other)),
        }
    }

    fn integer(&self, key: &'static str) -> Result<i64> {
        let value = self.require(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.wrong_type(key, "an integer", value))
    }

    fn boolean(&self, key: &'static str) -> Result<bool> {
        let value = self.require(key)?;
        value
            .as_bool()
            .ok_or_else(|| self.wrong_type(key, "a boolean", value))
    }
}
