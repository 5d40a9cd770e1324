//! Interactive log browser
//!
//! This module holds the browser state machine, its key bindings, the
//! components that draw it and the terminal event loop that drives it.

pub mod app_component;
pub mod components;
pub mod core;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod view;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use state::{AppState, InputMode, LoadRequest, ViewMode};
