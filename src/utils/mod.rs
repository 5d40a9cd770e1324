//! Utility modules for moodgit.
//!
//! - [`format`] - Pure text formatting shared by the table and the plain log
//! - [`color`] - Mood and intensity styling for the plain log output

pub mod color;
pub mod format;
