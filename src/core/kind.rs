//! The four record kinds handled by the seed loader and the listing service.

use std::fmt;

/// A kind of stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Inventory items
    Items,
    /// Customers
    Customers,
    /// Staff members
    Staff,
    /// Transactions
    Transactions,
}

impl RecordKind {
    /// Every kind.
    pub const ALL: [Self; 4] = [Self::Items, Self::Customers, Self::Staff, Self::Transactions];

    /// Capitalised label used in logs and confirmation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Items => "Items",
            Self::Customers => "Customers",
            Self::Staff => "Staff",
            Self::Transactions => "Transactions",
        }
    }

    /// Message returned by the listing service when no records of this kind exist.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Items => "No Items found",
            Self::Customers => "No Customers found",
            Self::Staff => "No Staff found",
            Self::Transactions => "No transactions found.",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
