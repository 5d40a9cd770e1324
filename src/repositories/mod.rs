//! Repository layer for database operations.
//!
//! Repositories keep entities as plain data models and hold the queries run
//! against them.

pub mod entry;

pub use entry::EntryRepository;
