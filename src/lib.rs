//! moodgit - a mood journal for the terminal
//!
//! This library records mood entries in a local SQLite journal, prints them
//! as a plain history and offers an interactive browser that pages, filters
//! and searches them, built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Journal database and the paged entry query
//! * [`ui`] - Interactive log browser
//! * [`display`] - Banner and plain entry printout
//! * [`utils`] - Formatting and styling helpers

/// Command line interface definitions
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Banner and one-line entry output
pub mod display;

/// SeaORM entity models for database tables
pub mod entities;

/// Journal entry domain types
pub mod entry;

/// Storage error types
pub mod error;

/// File logging setup
pub mod logger;

/// Moods and the mood filter cycle
pub mod mood;

/// Repository layer for database operations
pub mod repositories;

/// Journal storage and the query interface used by the browser
pub mod storage;

/// Interactive log browser
pub mod ui;

/// Formatting and color helpers
pub mod utils;

pub use entry::{Entry, EntryPage, NewEntry};
pub use error::{StoreError, StoreResult};
pub use mood::{Mood, MoodFilter};
