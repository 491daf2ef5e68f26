//! Project repository contract and SQLite implementation.
//!
//! # Invariants
//! - `kind` and `year` are persisted as stable snake_case codes, not labels.
//! - Append never rewrites candidate fields.

use super::{ensure_changed, parse_item_id, RepoError, RepoResult};
use crate::model::project::{Project, ProjectKind, ProjectRecord, ProjectYear};
use crate::model::{ItemId, Record};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const PROJECT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    kind,
    year,
    description,
    link
FROM projects";

/// Repository interface for the project collection.
pub trait ProjectRepository {
    /// Appends one project at the end of the collection.
    fn append_project(&self, project: &Project) -> RepoResult<ItemId>;
    /// Lists all projects in insertion order.
    fn list_projects(&self) -> RepoResult<Vec<ProjectRecord>>;
    fn get_project(&self, id: ItemId) -> RepoResult<Option<ProjectRecord>>;
    /// Replaces every field of an existing project, keeping its position.
    fn replace_project(&self, id: ItemId, project: &Project) -> RepoResult<()>;
    fn delete_project(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn append_project(&self, project: &Project) -> RepoResult<ItemId> {
        project.validate()?;

        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO projects (uuid, title, kind, year, description, link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id.to_string(),
                project.title.as_str(),
                project_kind_to_db(project.kind),
                project_year_to_db(project.year),
                project.description.as_str(),
                project.link.as_str(),
            ],
        )?;

        Ok(id)
    }

    fn list_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn get_project(&self, id: ItemId) -> RepoResult<Option<ProjectRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn replace_project(&self, id: ItemId, project: &Project) -> RepoResult<()> {
        project.validate()?;

        let changed = self.conn.execute(
            "UPDATE projects
             SET
                title = ?1,
                kind = ?2,
                year = ?3,
                description = ?4,
                link = ?5
             WHERE uuid = ?6;",
            params![
                project.title.as_str(),
                project_kind_to_db(project.kind),
                project_year_to_db(project.year),
                project.description.as_str(),
                project.link.as_str(),
                id.to_string(),
            ],
        )?;

        ensure_changed(changed, id)
    }

    fn delete_project(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE uuid = ?1;", [id.to_string()])?;
        ensure_changed(changed, id)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<ProjectRecord> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_item_id(&uuid_text, "projects")?;

    let kind_text: String = row.get("kind")?;
    let kind = parse_project_kind(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid project kind `{kind_text}` in projects.kind"))
    })?;

    let year_text: String = row.get("year")?;
    let year = parse_project_year(&year_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid project year `{year_text}` in projects.year"))
    })?;

    Ok(Record::new(
        id,
        Project {
            title: row.get("title")?,
            kind,
            year,
            description: row.get("description")?,
            link: row.get("link")?,
        },
    ))
}

fn project_kind_to_db(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Individual => "individual",
        ProjectKind::Group => "group",
        ProjectKind::Internship => "internship",
        ProjectKind::Dissertation => "dissertation",
        ProjectKind::ClassAssignment => "class_assignment",
    }
}

fn parse_project_kind(value: &str) -> Option<ProjectKind> {
    match value {
        "individual" => Some(ProjectKind::Individual),
        "group" => Some(ProjectKind::Group),
        "internship" => Some(ProjectKind::Internship),
        "dissertation" => Some(ProjectKind::Dissertation),
        "class_assignment" => Some(ProjectKind::ClassAssignment),
        _ => None,
    }
}

fn project_year_to_db(year: ProjectYear) -> &'static str {
    match year {
        ProjectYear::Year1 => "year_1",
        ProjectYear::Year2 => "year_2",
        ProjectYear::Year3 => "year_3",
        ProjectYear::FinalYear => "final_year",
    }
}

fn parse_project_year(value: &str) -> Option<ProjectYear> {
    match value {
        "year_1" => Some(ProjectYear::Year1),
        "year_2" => Some(ProjectYear::Year2),
        "year_3" => Some(ProjectYear::Year3),
        "final_year" => Some(ProjectYear::FinalYear),
        _ => None,
    }
}
