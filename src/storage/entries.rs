use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveValue::NotSet, Set};

use super::{EntryQuery, JournalStore};
use crate::entities::entry;
use crate::entry::{Entry, EntryPage, NewEntry};
use crate::error::{StoreError, StoreResult};
use crate::mood::MoodFilter;
use crate::repositories::EntryRepository;

impl JournalStore {
    /// Record a new entry, stamped with the current time.
    pub async fn add_entry(&self, new_entry: &NewEntry) -> StoreResult<Entry> {
        let now = Utc::now();
        let model = entry::ActiveModel {
            id: NotSet,
            intensity: Set(i32::from(new_entry.intensity)),
            mood: Set(new_entry.mood.as_str().to_string()),
            message: Set(new_entry.message.clone()),
            tags: Set(encode_tags(&new_entry.tags)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = EntryRepository::insert(&self.db, model).await?;
        debug!("Storage: added entry {} ({})", saved.id, saved.mood);
        entry_from_model(saved)
    }

    /// Overwrite the newest entry with new values, keeping its creation time.
    pub async fn amend_last_entry(&self, new_entry: &NewEntry) -> StoreResult<Entry> {
        let newest = EntryRepository::get_newest(&self.db)
            .await?
            .ok_or(StoreError::NoEntries)?;

        let mut model: entry::ActiveModel = newest.into();
        model.intensity = Set(i32::from(new_entry.intensity));
        model.mood = Set(new_entry.mood.as_str().to_string());
        model.message = Set(new_entry.message.clone());
        model.tags = Set(encode_tags(&new_entry.tags)?);
        model.updated_at = Set(Utc::now());

        let saved = EntryRepository::update(&self.db, model).await?;
        debug!("Storage: amended entry {}", saved.id);
        entry_from_model(saved)
    }

    /// The `limit` most recent entries, newest first.
    pub async fn history(&self, limit: u64) -> StoreResult<Vec<Entry>> {
        EntryRepository::get_recent(&self.db, limit)
            .await?
            .into_iter()
            .map(entry_from_model)
            .collect()
    }

    /// One page of entries matching `filter` and `search`, plus the match count.
    pub async fn query_page(
        &self,
        page_size: usize,
        offset: usize,
        filter: MoodFilter,
        search: &str,
    ) -> StoreResult<EntryPage> {
        let total_matching = EntryRepository::count_matching(&self.db, filter, search).await?;
        let entries = EntryRepository::get_page(&self.db, filter, search, page_size as u64, offset as u64)
            .await?
            .into_iter()
            .map(entry_from_model)
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(EntryPage {
            entries,
            total_matching: total_matching as usize,
        })
    }
}

#[async_trait]
impl EntryQuery for JournalStore {
    async fn query_entries(
        &self,
        page_size: usize,
        offset: usize,
        filter: MoodFilter,
        search: &str,
    ) -> StoreResult<EntryPage> {
        self.query_page(page_size, offset, filter, search).await
    }
}

fn encode_tags(tags: &[String]) -> StoreResult<String> {
    serde_json::to_string(tags).map_err(StoreError::TagEncode)
}

/// Decode a stored row; bad tag JSON or an unknown mood is a read failure.
pub(crate) fn entry_from_model(model: entry::Model) -> StoreResult<Entry> {
    let tags: Vec<String> = serde_json::from_str(&model.tags).map_err(|source| StoreError::TagDecode {
        id: model.id,
        source,
    })?;

    let mood = model.mood.parse().map_err(|_| StoreError::UnknownMood {
        id: model.id,
        mood: model.mood.clone(),
    })?;

    Ok(Entry {
        id: model.id,
        intensity: model.intensity.clamp(0, 10) as u8,
        mood,
        message: model.message,
        tags,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
