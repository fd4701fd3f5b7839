//! Meter catalog storage.
//!
//! The catalog is a flat list of [`MeterDefinition`] entries loaded from
//! JSON — embedded at compile time or supplied by the caller. Entries with a
//! missing or malformed pattern are kept for listing but excluded from
//! matching; they never cause an error.
//!
//! [`MeterDefinition`]: store::MeterDefinition

pub mod store;

pub use store::{CatalogError, MeterCatalog, MeterDefinition};
