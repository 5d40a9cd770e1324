//! Entry repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::entities::entry;
use crate::mood::MoodFilter;

/// Repository for entry-related database operations.
pub struct EntryRepository;

impl EntryRepository {
    /// Base query restricted by mood filter and substring search.
    ///
    /// The search term matches the message or the encoded tag list.
    fn matching(filter: MoodFilter, search: &str) -> Select<entry::Entity> {
        let mut query = entry::Entity::find();

        if let Some(mood) = filter.mood() {
            query = query.filter(entry::Column::Mood.eq(mood.as_str()));
        }

        if !search.is_empty() {
            query = query.filter(
                Condition::any()
                    .add(entry::Column::Message.contains(search))
                    .add(entry::Column::Tags.contains(search)),
            );
        }

        query
    }

    /// Count entries matching the filter and search, ignoring pagination.
    pub async fn count_matching<C>(conn: &C, filter: MoodFilter, search: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::matching(filter, search).count(conn).await
    }

    /// Get one window of matching entries, newest first.
    pub async fn get_page<C>(
        conn: &C,
        filter: MoodFilter,
        search: &str,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::matching(filter, search)
            .order_by_desc(entry::Column::CreatedAt)
            .order_by_desc(entry::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(conn)
            .await
    }

    /// Get the most recent entries, newest first.
    pub async fn get_recent<C>(conn: &C, limit: u64) -> Result<Vec<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::get_page(conn, MoodFilter::All, "", limit, 0).await
    }

    /// Get the newest entry, if any.
    pub async fn get_newest<C>(conn: &C) -> Result<Option<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        entry::Entity::find()
            .order_by_desc(entry::Column::CreatedAt)
            .order_by_desc(entry::Column::Id)
            .one(conn)
            .await
    }

    /// Insert a new entry.
    pub async fn insert<C>(conn: &C, entry: entry::ActiveModel) -> Result<entry::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        entry.insert(conn).await
    }

    /// Update an entry in the database.
    pub async fn update<C>(conn: &C, entry: entry::ActiveModel) -> Result<entry::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        entry.update(conn).await
    }
}
