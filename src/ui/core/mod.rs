//! Core UI building blocks for the interactive log browser.
//!
//! - [`actions`] - Messages and intents dispatched by the controller
//! - [`component`] - Base component trait for key handling and rendering
//! - [`event_handler`] - Terminal input reader feeding the action queue
//! - [`loader`] - Background page loads posting results to the action queue
//!
//! Terminal input and load results share one queue, and a single controller
//! consumes it in arrival order.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod loader;

pub use actions::{Action, PageLoaded};
pub use component::Component;
pub use event_handler::EventHandler;
pub use loader::{DataLoader, RequestId};
