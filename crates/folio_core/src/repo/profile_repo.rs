//! Profile, skill and achievement repository.
//!
//! # Responsibility
//! - Persist the single profile row with full-overwrite semantics.
//! - Persist skill levels keyed by skill name and the achievement list.
//!
//! # Invariants
//! - At most one profile row exists (`id = 1`).
//! - A never-written profile reads back as blank fields.
//! - Skill levels stay within `0..=MAX_SKILL_LEVEL`.

use super::{parse_item_id, RepoError, RepoResult};
use crate::model::profile::ProfileFields;
use crate::model::skill::{validate_skill_level, Achievement, AchievementRecord, Skill};
use crate::model::{ItemId, Record};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// Repository interface for profile-page content.
pub trait ProfileRepository {
    fn get_profile(&self) -> RepoResult<ProfileFields>;
    /// Overwrites every profile field.
    fn put_profile(&self, profile: &ProfileFields) -> RepoResult<()>;
    /// Lists skills in insertion order.
    fn list_skills(&self) -> RepoResult<Vec<Skill>>;
    fn append_skill(&self, skill: &Skill) -> RepoResult<()>;
    /// Sets the level of an existing skill, matched by exact name.
    fn set_skill_level(&self, name: &str, level: u8) -> RepoResult<()>;
    fn list_achievements(&self) -> RepoResult<Vec<AchievementRecord>>;
    fn append_achievement(&self, achievement: &Achievement) -> RepoResult<ItemId>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn get_profile(&self) -> RepoResult<ProfileFields> {
        let profile = self
            .conn
            .query_row(
                "SELECT name, location, field_of_study, university, bio
                 FROM profile
                 WHERE id = 1;",
                [],
                |row| {
                    Ok(ProfileFields {
                        name: row.get("name")?,
                        location: row.get("location")?,
                        field_of_study: row.get("field_of_study")?,
                        university: row.get("university")?,
                        bio: row.get("bio")?,
                    })
                },
            )
            .optional()?;

        Ok(profile.unwrap_or_default())
    }

    fn put_profile(&self, profile: &ProfileFields) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO profile (id, name, location, field_of_study, university, bio)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                location = excluded.location,
                field_of_study = excluded.field_of_study,
                university = excluded.university,
                bio = excluded.bio;",
            params![
                profile.name.as_str(),
                profile.location.as_str(),
                profile.field_of_study.as_str(),
                profile.university.as_str(),
                profile.bio.as_str(),
            ],
        )?;
        Ok(())
    }

    fn list_skills(&self) -> RepoResult<Vec<Skill>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, level FROM skills ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut skills = Vec::new();

        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let raw_level: i64 = row.get("level")?;
            let level = u32::try_from(raw_level)
                .ok()
                .and_then(|value| validate_skill_level(value).ok())
                .ok_or_else(|| {
                    RepoError::InvalidData(format!(
                        "invalid skill level `{raw_level}` in skills.level"
                    ))
                })?;
            skills.push(Skill { name, level });
        }

        Ok(skills)
    }

    fn append_skill(&self, skill: &Skill) -> RepoResult<()> {
        skill.validate()?;
        self.conn.execute(
            "INSERT INTO skills (name, level) VALUES (?1, ?2);",
            params![skill.name.as_str(), i64::from(skill.level)],
        )?;
        Ok(())
    }

    fn set_skill_level(&self, name: &str, level: u8) -> RepoResult<()> {
        validate_skill_level(u32::from(level))?;
        let changed = self.conn.execute(
            "UPDATE skills SET level = ?1 WHERE name = ?2;",
            params![i64::from(level), name],
        )?;
        if changed == 0 {
            return Err(RepoError::UnknownSkill(name.to_string()));
        }
        Ok(())
    }

    fn list_achievements(&self) -> RepoResult<Vec<AchievementRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, body FROM achievements ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut achievements = Vec::new();

        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("uuid")?;
            achievements.push(Record::new(
                parse_item_id(&uuid_text, "achievements")?,
                Achievement {
                    text: row.get("body")?,
                },
            ));
        }

        Ok(achievements)
    }

    fn append_achievement(&self, achievement: &Achievement) -> RepoResult<ItemId> {
        achievement.validate()?;

        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO achievements (uuid, body) VALUES (?1, ?2);",
            params![id.to_string(), achievement.text.as_str()],
        )?;
        Ok(id)
    }
}
