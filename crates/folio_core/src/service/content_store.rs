//! Session content store.
//!
//! # Responsibility
//! - Own one session's storage connection and its `initialized` gate.
//! - Expose read, filter, append, replace and delete operations over the
//!   portfolio collections plus full-overwrite profile updates.
//!
//! # Invariants
//! - `initialize` seeds default content at most once per store.
//! - Writes are rejected until `initialize` has run.
//! - A rejected write leaves every collection unchanged.
//! - Reads and profile updates fail only on storage faults.
//! - Successful writes are visible to the very next read.
//! - Log lines carry ids, counts and field names only, never user text.

use crate::db::{open_db_in_memory, DbError};
use crate::model::contact::{ContactLink, ContactMessage, ContactReceipt};
use crate::model::profile::ProfileFields;
use crate::model::project::{Project, ProjectRecord};
use crate::model::skill::{validate_skill_level, Achievement, AchievementRecord, Skill};
use crate::model::testimonial::{Testimonial, TestimonialRecord};
use crate::model::timeline::{TimelineEvent, TimelineEventRecord};
use crate::model::validation::ValidationError;
use crate::model::ItemId;
use crate::repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
use crate::repo::project_repo::{ProjectRepository, SqliteProjectRepository};
use crate::repo::testimonial_repo::{SqliteTestimonialRepository, TestimonialRepository};
use crate::repo::timeline_repo::{SqliteTimelineRepository, TimelineRepository};
use crate::repo::RepoError;
use crate::service::project_filter::{available_filters, ProjectFilter};
use crate::service::seed;
use log::{debug, error, info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for content store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Candidate failed required-field or label validation.
    Validation(ValidationError),
    /// Target item does not exist in this session.
    ItemNotFound(ItemId),
    /// Target skill name does not exist in this session.
    UnknownSkill(String),
    /// Write attempted before default content was loaded.
    NotInitialized,
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::UnknownSkill(name) => write!(f, "skill not found: `{name}`"),
            Self::NotInitialized => write!(f, "store is not initialized"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ItemNotFound(_) | Self::UnknownSkill(_) | Self::NotInitialized => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::ItemNotFound(id),
            RepoError::UnknownSkill(name) => Self::UnknownSkill(name),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(RepoError::from(value))
    }
}

/// Item counts per collection, used for diagnostics and seed checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentCounts {
    pub projects: usize,
    pub testimonials: usize,
    pub timeline_events: usize,
    pub skills: usize,
    pub achievements: usize,
}

/// In-memory content for one user session.
///
/// Mutating operations take `&mut self`, so one store has one writer at a
/// time; share it across threads through `SessionRegistry`.
pub struct ContentStore {
    conn: Connection,
    initialized: bool,
}

impl ContentStore {
    /// Opens an empty store backed by a private in-memory database.
    ///
    /// Writes fail with `NotInitialized` until `initialize` has run, so the
    /// default content always precedes user items.
    pub fn open() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            conn,
            initialized: false,
        })
    }

    /// Opens a store and loads the default content.
    pub fn open_seeded() -> StoreResult<Self> {
        let mut store = Self::open()?;
        store.initialize()?;
        Ok(store)
    }

    /// Loads default content once.
    ///
    /// Returns `true` when seeding ran and `false` when the store was already
    /// initialized. Seeding runs in one transaction: on error nothing is kept
    /// and the store stays uninitialized.
    pub fn initialize(&mut self) -> StoreResult<bool> {
        if self.initialized {
            debug!("event=store_init module=store status=skipped reason=already_initialized");
            return Ok(false);
        }

        let tx = self.conn.transaction()?;
        {
            let projects = SqliteProjectRepository::new(&tx);
            for project in seed::seed_projects() {
                projects.append_project(&project)?;
            }

            let testimonials = SqliteTestimonialRepository::new(&tx);
            for testimonial in seed::seed_testimonials() {
                testimonials.append_testimonial(&testimonial)?;
            }

            let timeline = SqliteTimelineRepository::new(&tx);
            for event in seed::seed_timeline() {
                timeline.append_event(&event)?;
            }

            let profile = SqliteProfileRepository::new(&tx);
            profile.put_profile(&seed::seed_profile())?;
            for skill in seed::seed_skills() {
                profile.append_skill(&skill)?;
            }
            for achievement in seed::seed_achievements() {
                profile.append_achievement(&achievement)?;
            }
        }
        tx.commit()?;

        self.initialized = true;
        let counts = self.counts()?;
        info!(
            "event=store_init module=store status=ok projects={} testimonials={} timeline_events={}",
            counts.projects, counts.testimonials, counts.timeline_events
        );
        Ok(true)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns current item counts for every collection.
    pub fn counts(&self) -> StoreResult<ContentCounts> {
        Ok(ContentCounts {
            projects: self.projects().list_projects()?.len(),
            testimonials: self.testimonials().list_testimonials()?.len(),
            timeline_events: self.timeline().list_events()?.len(),
            skills: self.profile_repo().list_skills()?.len(),
            achievements: self.profile_repo().list_achievements()?.len(),
        })
    }

    /// Lists projects in insertion order.
    ///
    /// The snapshot can be iterated any number of times; pair it with
    /// `ProjectFilter::apply` for a lazy filtered view.
    ///
    /// # Errors
    /// - `Repo` on a storage fault only; no content state makes this fail.
    pub fn list_projects(&self) -> StoreResult<Vec<ProjectRecord>> {
        Ok(self.projects().list_projects()?)
    }

    /// Lists projects matching `filter`, preserving insertion order.
    ///
    /// # Errors
    /// - `Repo` on a storage fault only; no content state makes this fail.
    pub fn filter_projects(&self, filter: &ProjectFilter) -> StoreResult<Vec<ProjectRecord>> {
        let records = self.projects().list_projects()?;
        Ok(filter.apply(&records).cloned().collect())
    }

    /// Returns `All` followed by the sorted year and type criteria present now.
    pub fn available_project_filters(&self) -> StoreResult<Vec<ProjectFilter>> {
        let records = self.projects().list_projects()?;
        Ok(available_filters(records.iter().map(|record| &record.item)))
    }

    pub fn get_project(&self, id: ItemId) -> StoreResult<Option<ProjectRecord>> {
        Ok(self.projects().get_project(id)?)
    }

    /// Appends a validated project and returns its id.
    ///
    /// # Errors
    /// - `Validation` when `title` or `description` is blank.
    pub fn add_project(&mut self, candidate: Project) -> StoreResult<ItemId> {
        self.ensure_initialized("project_add")?;
        let result = self
            .projects()
            .append_project(&candidate)
            .map_err(StoreError::from);
        log_write("project_add", result.as_ref().copied());
        result
    }

    /// Replaces every field of an existing project in place.
    pub fn update_project(&mut self, id: ItemId, candidate: Project) -> StoreResult<()> {
        self.ensure_initialized("project_update")?;
        let result = self
            .projects()
            .replace_project(id, &candidate)
            .map_err(StoreError::from);
        log_write("project_update", result.as_ref().map(|_| id));
        result
    }

    pub fn delete_project(&mut self, id: ItemId) -> StoreResult<()> {
        self.ensure_initialized("project_delete")?;
        let result = self.projects().delete_project(id).map_err(StoreError::from);
        log_write("project_delete", result.as_ref().map(|_| id));
        result
    }

    pub fn list_testimonials(&self) -> StoreResult<Vec<TestimonialRecord>> {
        Ok(self.testimonials().list_testimonials()?)
    }

    /// Appends a testimonial; `name` and `text` are required.
    pub fn add_testimonial(&mut self, candidate: Testimonial) -> StoreResult<ItemId> {
        self.ensure_initialized("testimonial_add")?;
        let result = self
            .testimonials()
            .append_testimonial(&candidate)
            .map_err(StoreError::from);
        log_write("testimonial_add", result.as_ref().copied());
        result
    }

    pub fn update_testimonial(&mut self, id: ItemId, candidate: Testimonial) -> StoreResult<()> {
        self.ensure_initialized("testimonial_update")?;
        let result = self
            .testimonials()
            .replace_testimonial(id, &candidate)
            .map_err(StoreError::from);
        log_write("testimonial_update", result.as_ref().map(|_| id));
        result
    }

    pub fn delete_testimonial(&mut self, id: ItemId) -> StoreResult<()> {
        self.ensure_initialized("testimonial_delete")?;
        let result = self
            .testimonials()
            .delete_testimonial(id)
            .map_err(StoreError::from);
        log_write("testimonial_delete", result.as_ref().map(|_| id));
        result
    }

    pub fn list_timeline_events(&self) -> StoreResult<Vec<TimelineEventRecord>> {
        Ok(self.timeline().list_events()?)
    }

    /// Appends a timeline event; `year` and `event` are required.
    pub fn add_timeline_event(&mut self, candidate: TimelineEvent) -> StoreResult<ItemId> {
        self.ensure_initialized("timeline_add")?;
        let result = self
            .timeline()
            .append_event(&candidate)
            .map_err(StoreError::from);
        log_write("timeline_add", result.as_ref().copied());
        result
    }

    pub fn update_timeline_event(
        &mut self,
        id: ItemId,
        candidate: TimelineEvent,
    ) -> StoreResult<()> {
        self.ensure_initialized("timeline_update")?;
        let result = self
            .timeline()
            .replace_event(id, &candidate)
            .map_err(StoreError::from);
        log_write("timeline_update", result.as_ref().map(|_| id));
        result
    }

    pub fn delete_timeline_event(&mut self, id: ItemId) -> StoreResult<()> {
        self.ensure_initialized("timeline_delete")?;
        let result = self.timeline().delete_event(id).map_err(StoreError::from);
        log_write("timeline_delete", result.as_ref().map(|_| id));
        result
    }

    /// Returns the current profile fields.
    ///
    /// # Errors
    /// - `Repo` on a storage fault only; no content state makes this fail.
    pub fn profile(&self) -> StoreResult<ProfileFields> {
        Ok(self.profile_repo().get_profile()?)
    }

    /// Overwrites all profile fields. Blank values are accepted.
    ///
    /// # Errors
    /// - `NotInitialized` before `initialize` has run.
    /// - `Repo` on a storage fault; field values never cause a failure.
    pub fn update_profile(&mut self, fields: ProfileFields) -> StoreResult<()> {
        self.ensure_initialized("profile_update")?;
        self.profile_repo().put_profile(&fields)?;
        info!("event=profile_update module=store status=ok");
        Ok(())
    }

    pub fn list_skills(&self) -> StoreResult<Vec<Skill>> {
        Ok(self.profile_repo().list_skills()?)
    }

    /// Sets the level of a named skill.
    ///
    /// # Errors
    /// - `Validation` when `level` exceeds the maximum.
    /// - `UnknownSkill` when no skill has this exact name.
    pub fn set_skill_level(&mut self, name: &str, level: u32) -> StoreResult<()> {
        self.ensure_initialized("skill_update")?;
        let result = validate_skill_level(level)
            .map_err(StoreError::from)
            .and_then(|level| {
                self.profile_repo()
                    .set_skill_level(name, level)
                    .map_err(StoreError::from)
            });
        match &result {
            Ok(()) => info!("event=skill_update module=store status=ok level={level}"),
            Err(err) => log_failure("skill_update", err),
        }
        result
    }

    pub fn list_achievements(&self) -> StoreResult<Vec<AchievementRecord>> {
        Ok(self.profile_repo().list_achievements()?)
    }

    pub fn add_achievement(&mut self, candidate: Achievement) -> StoreResult<ItemId> {
        self.ensure_initialized("achievement_add")?;
        let result = self
            .profile_repo()
            .append_achievement(&candidate)
            .map_err(StoreError::from);
        log_write("achievement_add", result.as_ref().copied());
        result
    }

    pub fn contact_links(&self) -> Vec<ContactLink> {
        seed::contact_links()
    }

    /// Acknowledges a contact message without storing or forwarding it.
    ///
    /// Every submission is acknowledged, blank fields included.
    pub fn submit_contact_message(&self, message: ContactMessage) -> ContactReceipt {
        let receipt = ContactReceipt {
            receipt_id: Uuid::new_v4(),
            message_chars: message.message.chars().count(),
        };
        info!(
            "event=contact_submit module=store status=ok receipt_id={} message_chars={} blank_fields={}",
            receipt.receipt_id,
            receipt.message_chars,
            message.blank_fields()
        );
        receipt
    }

    fn ensure_initialized(&self, event: &str) -> StoreResult<()> {
        if self.initialized {
            return Ok(());
        }
        let err = StoreError::NotInitialized;
        log_failure(event, &err);
        Err(err)
    }

    fn projects(&self) -> SqliteProjectRepository<'_> {
        SqliteProjectRepository::new(&self.conn)
    }

    fn testimonials(&self) -> SqliteTestimonialRepository<'_> {
        SqliteTestimonialRepository::new(&self.conn)
    }

    fn timeline(&self) -> SqliteTimelineRepository<'_> {
        SqliteTimelineRepository::new(&self.conn)
    }

    fn profile_repo(&self) -> SqliteProfileRepository<'_> {
        SqliteProfileRepository::new(&self.conn)
    }
}

fn log_write(event: &str, outcome: Result<ItemId, &StoreError>) {
    match outcome {
        Ok(id) => info!("event={event} module=store status=ok item_id={id}"),
        Err(err) => log_failure(event, err),
    }
}

fn log_failure(event: &str, err: &StoreError) {
    match err {
        StoreError::Validation(validation) => warn!(
            "event={event} module=store status=rejected field={}",
            validation.field
        ),
        StoreError::ItemNotFound(id) => {
            warn!("event={event} module=store status=not_found item_id={id}")
        }
        StoreError::UnknownSkill(_) => {
            warn!("event={event} module=store status=not_found error_code=unknown_skill")
        }
        StoreError::NotInitialized => {
            warn!("event={event} module=store status=rejected error_code=not_initialized")
        }
        StoreError::Repo(repo_err) => error!(
            "event={event} module=store status=error error_code=repo_failed error={repo_err}"
        ),
    }
}
