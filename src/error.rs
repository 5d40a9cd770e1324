//! Error types for the journal store.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("failed to decode tags of entry {id}: {source}")]
    TagDecode {
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode tags: {0}")]
    TagEncode(#[source] serde_json::Error),

    #[error("entry {id} has an unknown mood '{mood}'")]
    UnknownMood { id: i32, mood: String },

    #[error("no journal found at {}\ndid you run moodgit init?", .0.display())]
    NotInitialized(PathBuf),

    #[error("{} already exists, use --force to overwrite", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("there is no entry to amend")]
    NoEntries,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
