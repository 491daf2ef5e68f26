//! Testimonial repository contract and SQLite implementation.

use super::{ensure_changed, parse_item_id, RepoResult};
use crate::model::testimonial::{Testimonial, TestimonialRecord};
use crate::model::{ItemId, Record};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TESTIMONIAL_SELECT_SQL: &str = "SELECT uuid, name, role, body FROM testimonials";

/// Repository interface for the testimonial collection.
pub trait TestimonialRepository {
    fn append_testimonial(&self, testimonial: &Testimonial) -> RepoResult<ItemId>;
    fn list_testimonials(&self) -> RepoResult<Vec<TestimonialRecord>>;
    fn get_testimonial(&self, id: ItemId) -> RepoResult<Option<TestimonialRecord>>;
    fn replace_testimonial(&self, id: ItemId, testimonial: &Testimonial) -> RepoResult<()>;
    fn delete_testimonial(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed testimonial repository.
pub struct SqliteTestimonialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTestimonialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TestimonialRepository for SqliteTestimonialRepository<'_> {
    fn append_testimonial(&self, testimonial: &Testimonial) -> RepoResult<ItemId> {
        testimonial.validate()?;

        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO testimonials (uuid, name, role, body) VALUES (?1, ?2, ?3, ?4);",
            params![
                id.to_string(),
                testimonial.name.as_str(),
                testimonial.role.as_str(),
                testimonial.text.as_str(),
            ],
        )?;

        Ok(id)
    }

    fn list_testimonials(&self) -> RepoResult<Vec<TestimonialRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TESTIMONIAL_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut testimonials = Vec::new();

        while let Some(row) = rows.next()? {
            testimonials.push(parse_testimonial_row(row)?);
        }

        Ok(testimonials)
    }

    fn get_testimonial(&self, id: ItemId) -> RepoResult<Option<TestimonialRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TESTIMONIAL_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_testimonial_row(row)?));
        }

        Ok(None)
    }

    fn replace_testimonial(&self, id: ItemId, testimonial: &Testimonial) -> RepoResult<()> {
        testimonial.validate()?;

        let changed = self.conn.execute(
            "UPDATE testimonials SET name = ?1, role = ?2, body = ?3 WHERE uuid = ?4;",
            params![
                testimonial.name.as_str(),
                testimonial.role.as_str(),
                testimonial.text.as_str(),
                id.to_string(),
            ],
        )?;

        ensure_changed(changed, id)
    }

    fn delete_testimonial(&self, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM testimonials WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        ensure_changed(changed, id)
    }
}

fn parse_testimonial_row(row: &Row<'_>) -> RepoResult<TestimonialRecord> {
    let uuid_text: String = row.get("uuid")?;
    Ok(Record::new(
        parse_item_id(&uuid_text, "testimonials")?,
        Testimonial {
            name: row.get("name")?,
            role: row.get("role")?,
            text: row.get("body")?,
        },
    ))
}
