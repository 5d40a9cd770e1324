//! UI components

pub mod entry_table;
pub mod header;
pub mod help_panel;
pub mod scrollbar_helper;
pub mod status_bar;

pub use entry_table::{EntryRow, EntryTable};
pub use header::Header;
pub use help_panel::HelpPanel;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::StatusBar;
