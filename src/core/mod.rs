//! Core record logic - framework-agnostic construction, seeding and listing.
//!
//! Nothing here knows about HTTP; handlers in [`crate::http`] call into these
//! functions with the shared database connection.

/// Customer construction and lookups
pub mod customer;
/// Inventory item construction and lookups
pub mod item;
/// Record kinds shared by the loader and the listing service
pub mod kind;
/// Text rendering of stored records
pub mod listing;
/// Bulk loading from JSON seed files
pub mod seed;
/// Staff construction and lookups
pub mod staff;
/// Transaction construction and reference lookups
pub mod transaction;
/// Pure field validators
pub mod validate;

pub use kind::RecordKind;
