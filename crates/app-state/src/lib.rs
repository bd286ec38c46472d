//! Application state management for Wayfare
//!
//! This crate provides the observable state cells and asynchronous
//! state-update pipelines behind the UI: destination search filtering,
//! the traveler counter, and the details-page lookup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod details;
pub mod people;
pub mod search;
