//! Constants used throughout the application
//!
//! This module centralizes UI text, layout widths and defaults.

// Interactive browser text
pub const BROWSER_TITLE: &str = "🎭 moodgit interactive";
pub const STATUS_HINTS: &str =
    "↑/↓,j/k: navigate | q: quit | /: search | f: filter | r: refresh | ←/→: page | ?: help";
pub const HELP_TITLE: &str = "🎭 moodgit interactive log - help";

// Table columns
pub const COLUMN_TITLES: [&str; 5] = ["date", "mood", "intensity", "message", "tags"];
pub const COLUMN_WIDTHS: [u16; 5] = [16, 12, 9, 30, 20];
/// Messages longer than this are cut and end with an ellipsis
pub const MESSAGE_MAX_WIDTH: usize = 28;

// Terminal size assumed until the first resize event
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 24;

// Paging
pub const DEFAULT_PAGE_SIZE: u16 = 10;
pub const MAX_PAGE_SIZE: u16 = 500;

// Repository layout, relative to the home directory
pub const REPOSITORY_DIR: &str = ".moodgit";
pub const DATABASE_FILE: &str = "moodgit.db";
pub const LOG_FILE: &str = "moodgit.log";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const TAGLINE: &str = "a simple CLI tool to log and track your mood.";
pub const HELP_HINT: &str = "run 'moodgit --help' to see available commands.";
