//! Local storage for the mood journal
//!
//! This module owns the SQLite journal (via SeaORM) and exposes:
//! - repository bootstrap (`init`, `open`, schema migration)
//! - entry creation and amendment of the newest entry
//! - the paged, filtered query consumed by the interactive log browser
//!
//! The browser never sees [`JournalStore`] directly; it is handed an
//! [`EntryQuery`] so tests can substitute their own collaborator.

pub mod db;
pub mod entries;

pub use db::JournalStore;

use async_trait::async_trait;

use crate::entry::EntryPage;
use crate::error::StoreResult;
use crate::mood::MoodFilter;

/// Read-only query interface the log browser loads pages through.
#[async_trait]
pub trait EntryQuery: Send + Sync {
    /// Fetch up to `page_size` entries starting at `offset`, newest first.
    ///
    /// `EntryPage::total_matching` counts every entry matching `filter` and
    /// `search`, without the pagination window applied. An empty `search`
    /// applies no text restriction; otherwise it is a substring match against
    /// the message or the tags.
    async fn query_entries(
        &self,
        page_size: usize,
        offset: usize,
        filter: MoodFilter,
        search: &str,
    ) -> StoreResult<EntryPage>;
}
