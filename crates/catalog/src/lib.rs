//! Travel catalog for Wayfare
//!
//! This crate provides the static in-memory catalog of places (hotels,
//! restaurants, and flight destinations), the read-only data provider
//! consumed by the state layer, and the pure destination filter.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod filter;
pub mod source;

pub use data::{City, Place};
pub use filter::filter_destinations;
pub use source::{CatalogError, CatalogSource, LocalCatalog, Result};
