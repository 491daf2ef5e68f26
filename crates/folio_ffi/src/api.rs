//! FFI use-case API for the portfolio UI.
//!
//! # Responsibility
//! - Expose session-scoped content operations to Dart via FRB.
//! - Translate core errors into response envelopes the UI can render inline.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every content call names its session; sessions never share content.
//! - Blank required fields surface as `REQUIRED_FIELDS_MESSAGE` plus the
//!   offending field name, so the UI can keep the user's input and retry.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Achievement, AchievementRecord, ContactMessage, ContentStore, FolioConfig, ProfileFields,
    Project, ProjectFilter, ProjectRecord, SessionError, SessionId, SessionRegistry, StoreError,
    StoreResult, Testimonial, TestimonialRecord, TimelineEvent, TimelineEventRecord,
    ValidationError, ALL_FILTER_LABEL,
};
use log::warn;
use std::sync::OnceLock;
use uuid::Uuid;

/// User-facing message for blank required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

static SESSIONS: OnceLock<SessionRegistry> = OnceLock::new();

fn sessions() -> &'static SessionRegistry {
    SESSIONS.get_or_init(|| SessionRegistry::new(FolioConfig::from_env().max_sessions))
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Session lifecycle response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub ok: bool,
    /// New session id on successful open.
    pub session_id: Option<String>,
    pub message: String,
}

/// Write-operation response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the created or affected item.
    pub item_id: Option<String>,
    /// Field that failed validation, when applicable.
    pub field: Option<String>,
    /// Human-readable message for inline display.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, item_id: Option<String>) -> Self {
        Self {
            ok: true,
            item_id,
            field: None,
            message: message.into(),
        }
    }

    fn failure(failure: Failure) -> Self {
        Self {
            ok: false,
            item_id: None,
            field: failure.field,
            message: failure.message,
        }
    }
}

/// Project row with labels ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub year: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub items: Vec<ProjectItem>,
    /// Criterion label actually applied (`All` when none was given).
    pub applied_filter: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialItem {
    pub id: String,
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialListResponse {
    pub items: Vec<TestimonialItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub id: String,
    pub year: String,
    pub event: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineListResponse {
    pub items: Vec<TimelineItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileItem {
    pub name: String,
    pub location: String,
    pub field_of_study: String,
    pub university: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub profile: Option<ProfileItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillItem {
    pub name: String,
    pub level: u32,
}

/// Skills page content: levels plus achievement lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsResponse {
    pub skills: Vec<SkillItem>,
    pub achievements: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinkItem {
    pub label: String,
    pub url: String,
}

/// Opens a new session with default content.
#[flutter_rust_bridge::frb(sync)]
pub fn session_open() -> SessionResponse {
    match sessions().open_session() {
        Ok(session_id) => SessionResponse {
            ok: true,
            session_id: Some(session_id.to_string()),
            message: "Session opened.".to_string(),
        },
        Err(err) => SessionResponse {
            ok: false,
            session_id: None,
            message: format!("session_open failed: {err}"),
        },
    }
}

/// Closes a session and discards everything it held.
#[flutter_rust_bridge::frb(sync)]
pub fn session_close(session_id: String) -> ActionResponse {
    let result = parse_session_id(&session_id).and_then(|id| {
        sessions()
            .close_session(id)
            .map_err(|err| Failure::from_session("session_close", err))
    });
    match result {
        Ok(()) => ActionResponse::success("Session closed.", None),
        Err(failure) => ActionResponse::failure(failure),
    }
}

/// Lists projects, optionally narrowed by a criterion label.
///
/// `None`, empty and `"All"` return every project. Unknown labels return an
/// empty list with an explanatory message.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list(session_id: String, filter: Option<String>) -> ProjectListResponse {
    let label = filter
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| ALL_FILTER_LABEL.to_string());

    let Some(criterion) = ProjectFilter::parse(&label) else {
        return ProjectListResponse {
            items: Vec::new(),
            applied_filter: label.clone(),
            message: format!("Unknown project filter `{label}`."),
        };
    };

    match with_store(&session_id, "project_list", |store| {
        store.filter_projects(&criterion)
    }) {
        Ok(records) => {
            let items: Vec<ProjectItem> = records.into_iter().map(to_project_item).collect();
            let message = if items.is_empty() {
                "No projects.".to_string()
            } else {
                format!("Found {} project(s).", items.len())
            };
            ProjectListResponse {
                items,
                applied_filter: criterion.label().to_string(),
                message,
            }
        }
        Err(failure) => ProjectListResponse {
            items: Vec::new(),
            applied_filter: criterion.label().to_string(),
            message: failure.message,
        },
    }
}

/// Returns the criterion labels for the filter selector.
///
/// Order: `All`, sorted year labels, sorted type labels. Falls back to just
/// `All` when the session is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn project_filters(session_id: String) -> Vec<String> {
    match with_store(&session_id, "project_filters", |store| {
        store.available_project_filters()
    }) {
        Ok(filters) => filters
            .iter()
            .map(|filter| filter.label().to_string())
            .collect(),
        Err(_) => vec![ALL_FILTER_LABEL.to_string()],
    }
}

/// Adds a project from form labels.
#[flutter_rust_bridge::frb(sync)]
pub fn project_add(
    session_id: String,
    title: String,
    kind: String,
    year: String,
    description: String,
    link: String,
) -> ActionResponse {
    let result = Project::from_labels(title, &kind, &year, description, link)
        .map_err(Failure::from_validation)
        .and_then(|candidate| {
            with_store(&session_id, "project_add", |store| {
                store.add_project(candidate)
            })
        });
    match result {
        Ok(id) => ActionResponse::success("Project added successfully!", Some(id.to_string())),
        Err(failure) => ActionResponse::failure(failure),
    }
}

/// Replaces every field of an existing project.
#[flutter_rust_bridge::frb(sync)]
#[allow(clippy::too_many_arguments)]
pub fn project_update(
    session_id: String,
    project_id: String,
    title: String,
    kind: String,
    year: String,
    description: String,
    link: String,
) -> ActionResponse {
    let result = parse_item_id(&project_id).and_then(|id| {
        let candidate = Project::from_labels(title, &kind, &year, description, link)
            .map_err(Failure::from_validation)?;
        with_store(&session_id, "project_update", |store| {
            store.update_project(id, candidate)
        })?;
        Ok(id)
    });
    match result {
        Ok(id) => ActionResponse::success("Project updated.", Some(id.to_string())),
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn project_delete(session_id: String, project_id: String) -> ActionResponse {
    let result = parse_item_id(&project_id).and_then(|id| {
        with_store(&session_id, "project_delete", |store| store.delete_project(id))?;
        Ok(id)
    });
    match result {
        Ok(id) => ActionResponse::success("Project deleted.", Some(id.to_string())),
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn testimonial_list(session_id: String) -> TestimonialListResponse {
    match with_store(&session_id, "testimonial_list", |store| {
        store.list_testimonials()
    }) {
        Ok(records) => TestimonialListResponse {
            message: format!("Found {} testimonial(s).", records.len()),
            items: records.into_iter().map(to_testimonial_item).collect(),
        },
        Err(failure) => TestimonialListResponse {
            items: Vec::new(),
            message: failure.message,
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn testimonial_add(
    session_id: String,
    name: String,
    role: String,
    text: String,
) -> ActionResponse {
    let candidate = Testimonial::new(name, role, text);
    match with_store(&session_id, "testimonial_add", |store| {
        store.add_testimonial(candidate)
    }) {
        Ok(id) => {
            ActionResponse::success("Testimonial added successfully!", Some(id.to_string()))
        }
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn timeline_list(session_id: String) -> TimelineListResponse {
    match with_store(&session_id, "timeline_list", |store| {
        store.list_timeline_events()
    }) {
        Ok(records) => TimelineListResponse {
            message: format!("Found {} event(s).", records.len()),
            items: records.into_iter().map(to_timeline_item).collect(),
        },
        Err(failure) => TimelineListResponse {
            items: Vec::new(),
            message: failure.message,
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn timeline_add(
    session_id: String,
    year: String,
    event: String,
    description: String,
) -> ActionResponse {
    let candidate = TimelineEvent::new(year, event, description);
    match with_store(&session_id, "timeline_add", |store| {
        store.add_timeline_event(candidate)
    }) {
        Ok(id) => {
            ActionResponse::success("Timeline event added successfully!", Some(id.to_string()))
        }
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile_get(session_id: String) -> ProfileResponse {
    match with_store(&session_id, "profile_get", |store| store.profile()) {
        Ok(profile) => ProfileResponse {
            profile: Some(to_profile_item(profile)),
            message: String::new(),
        },
        Err(failure) => ProfileResponse {
            profile: None,
            message: failure.message,
        },
    }
}

/// Overwrites all profile fields; blank values are accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_update(
    session_id: String,
    name: String,
    location: String,
    field_of_study: String,
    university: String,
    bio: String,
) -> ActionResponse {
    let fields = ProfileFields {
        name,
        location,
        field_of_study,
        university,
        bio,
    };
    match with_store(&session_id, "profile_update", |store| {
        store.update_profile(fields)
    }) {
        Ok(()) => ActionResponse::success("Profile updated successfully!", None),
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn skill_list(session_id: String) -> SkillsResponse {
    let result = with_store(&session_id, "skill_list", |store| {
        Ok((store.list_skills()?, store.list_achievements()?))
    });
    match result {
        Ok((skills, achievements)) => SkillsResponse {
            skills: skills
                .into_iter()
                .map(|skill| SkillItem {
                    name: skill.name,
                    level: u32::from(skill.level),
                })
                .collect(),
            achievements: achievements.into_iter().map(achievement_text).collect(),
            message: String::new(),
        },
        Err(failure) => SkillsResponse {
            skills: Vec::new(),
            achievements: Vec::new(),
            message: failure.message,
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn skill_set_level(session_id: String, name: String, level: u32) -> ActionResponse {
    match with_store(&session_id, "skill_set_level", |store| {
        store.set_skill_level(name.trim(), level)
    }) {
        Ok(()) => ActionResponse::success("Skill updated.", None),
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn achievement_add(session_id: String, text: String) -> ActionResponse {
    match with_store(&session_id, "achievement_add", |store| {
        store.add_achievement(Achievement::new(text))
    }) {
        Ok(id) => ActionResponse::success("Achievement added.", Some(id.to_string())),
        Err(failure) => ActionResponse::failure(failure),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn contact_links(session_id: String) -> Vec<ContactLinkItem> {
    with_store(&session_id, "contact_links", |store| Ok(store.contact_links()))
        .unwrap_or_default()
        .into_iter()
        .map(|link| ContactLinkItem {
            label: link.label,
            url: link.url,
        })
        .collect()
}

/// Acknowledges a contact form submission. The message is not kept.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_submit(
    session_id: String,
    name: String,
    email: String,
    message: String,
) -> ActionResponse {
    let candidate = ContactMessage::new(name, email, message);
    match with_store(&session_id, "contact_submit", |store| {
        Ok(store.submit_contact_message(candidate))
    }) {
        Ok(receipt) => ActionResponse::success(
            "Message sent successfully",
            Some(receipt.receipt_id.to_string()),
        ),
        Err(failure) => ActionResponse::failure(failure),
    }
}

/// Error shape handed back to the UI.
#[derive(Debug)]
struct Failure {
    field: Option<String>,
    message: String,
}

impl Failure {
    fn from_validation(err: ValidationError) -> Self {
        let message = if err.is_blank() {
            REQUIRED_FIELDS_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        Self {
            field: Some(err.field.to_string()),
            message,
        }
    }

    fn from_session(operation: &str, err: SessionError) -> Self {
        match err {
            SessionError::Store(StoreError::Validation(validation)) => {
                Self::from_validation(validation)
            }
            other => {
                warn!("event=ffi_call module=ffi status=error operation={operation} error={other}");
                Self {
                    field: None,
                    message: format!("{operation} failed: {other}"),
                }
            }
        }
    }
}

fn with_store<T>(
    session_id: &str,
    operation: &str,
    f: impl FnOnce(&mut ContentStore) -> StoreResult<T>,
) -> Result<T, Failure> {
    let id = parse_session_id(session_id)?;
    sessions()
        .with_session(id, f)
        .map_err(|err| Failure::from_session(operation, err))
}

fn parse_session_id(value: &str) -> Result<SessionId, Failure> {
    Uuid::parse_str(value.trim()).map_err(|_| Failure {
        field: None,
        message: "invalid session id".to_string(),
    })
}

fn parse_item_id(value: &str) -> Result<Uuid, Failure> {
    Uuid::parse_str(value.trim()).map_err(|_| Failure {
        field: Some("id".to_string()),
        message: "invalid item id".to_string(),
    })
}

fn to_project_item(record: ProjectRecord) -> ProjectItem {
    ProjectItem {
        id: record.id.to_string(),
        kind: record.item.kind.label().to_string(),
        year: record.item.year.label().to_string(),
        title: record.item.title,
        description: record.item.description,
        link: record.item.link,
    }
}

fn to_testimonial_item(record: TestimonialRecord) -> TestimonialItem {
    TestimonialItem {
        id: record.id.to_string(),
        name: record.item.name,
        role: record.item.role,
        text: record.item.text,
    }
}

fn to_timeline_item(record: TimelineEventRecord) -> TimelineItem {
    TimelineItem {
        id: record.id.to_string(),
        year: record.item.year,
        event: record.item.event,
        description: record.item.description,
    }
}

fn to_profile_item(profile: ProfileFields) -> ProfileItem {
    ProfileItem {
        name: profile.name,
        location: profile.location,
        field_of_study: profile.field_of_study,
        university: profile.university,
        bio: profile.bio,
    }
}

fn achievement_text(record: AchievementRecord) -> String {
    record.item.text
}
