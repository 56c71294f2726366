//! Listing service - Renders every stored record of a kind as text.

use crate::{
    core::{RecordKind, customer, item, staff, transaction},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Line terminator appended after each record.
pub const LINE_BREAK: &str = "<br>";

/// Renders every record of `kind` in insertion order, one summary per line.
///
/// Each summary is followed by [`LINE_BREAK`]. When no records exist the kind's
/// [`RecordKind::empty_message`] is returned instead, never an empty string.
pub async fn list_records(db: &DatabaseConnection, kind: RecordKind) -> Result<String> {
    let lines: Vec<String> = match kind {
        RecordKind::Items => item::get_all_items(db)
            .await?
            .iter()
            .map(item::summary)
            .collect(),
        RecordKind::Customers => customer::get_all_customers(db)
            .await?
            .iter()
            .map(customer::summary)
            .collect(),
        RecordKind::Staff => staff::get_all_staff(db)
            .await?
            .iter()
            .map(staff::summary)
            .collect(),
        RecordKind::Transactions => transaction::get_all_transactions(db)
            .await?
            .iter()
            .map(transaction::summary)
            .collect(),
    };

    Ok(render(kind, &lines))
}

fn render(kind: RecordKind, lines: &[String]) -> String {
    if lines.is_empty() {
        return kind.empty_message().to_string();
    }
    lines.iter().map(|line| format!("{line}{LINE_BREAK}")).collect()
}
