//! Timeline repository contract and SQLite implementation.

use super::{ensure_changed, parse_item_id, RepoResult};
use crate::model::timeline::{TimelineEvent, TimelineEventRecord};
use crate::model::{ItemId, Record};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TIMELINE_SELECT_SQL: &str = "SELECT uuid, year, event, description FROM timeline_events";

/// Repository interface for the timeline collection.
pub trait TimelineRepository {
    fn append_event(&self, event: &TimelineEvent) -> RepoResult<ItemId>;
    fn list_events(&self) -> RepoResult<Vec<TimelineEventRecord>>;
    fn get_event(&self, id: ItemId) -> RepoResult<Option<TimelineEventRecord>>;
    fn replace_event(&self, id: ItemId, event: &TimelineEvent) -> RepoResult<()>;
    fn delete_event(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed timeline repository.
pub struct SqliteTimelineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTimelineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TimelineRepository for SqliteTimelineRepository<'_> {
    fn append_event(&self, event: &TimelineEvent) -> RepoResult<ItemId> {
        event.validate()?;

        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO timeline_events (uuid, year, event, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                id.to_string(),
                event.year.as_str(),
                event.event.as_str(),
                event.description.as_str(),
            ],
        )?;

        Ok(id)
    }

    fn list_events(&self) -> RepoResult<Vec<TimelineEventRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TIMELINE_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }

    fn get_event(&self, id: ItemId) -> RepoResult<Option<TimelineEventRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TIMELINE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }

        Ok(None)
    }

    fn replace_event(&self, id: ItemId, event: &TimelineEvent) -> RepoResult<()> {
        event.validate()?;

        let changed = self.conn.execute(
            "UPDATE timeline_events SET year = ?1, event = ?2, description = ?3 WHERE uuid = ?4;",
            params![
                event.year.as_str(),
                event.event.as_str(),
                event.description.as_str(),
                id.to_string(),
            ],
        )?;

        ensure_changed(changed, id)
    }

    fn delete_event(&self, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM timeline_events WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        ensure_changed(changed, id)
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<TimelineEventRecord> {
    let uuid_text: String = row.get("uuid")?;
    Ok(Record::new(
        parse_item_id(&uuid_text, "timeline_events")?,
        TimelineEvent {
            year: row.get("year")?,
            event: row.get("event")?,
            description: row.get("description")?,
        },
    ))
}
