//! Presentation-independent UI state for Wayfare
//!
//! This crate holds the state behind the screens without coupling to any
//! rendering framework: the destination tabs and home screen state, the
//! editable text-input state holder, and the landing (splash) timer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod input;
pub mod landing;
pub mod navigation;

pub use input::EditableInputState;
pub use landing::{LandingTimer, SPLASH_WAIT};
pub use navigation::{DestinationTab, HomeEvent, HomeState};
