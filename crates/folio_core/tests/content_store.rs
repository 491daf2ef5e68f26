use folio_core::{
    Achievement, ContactMessage, ContentCounts, ContentStore, ProfileFields, Project,
    ProjectFilter, ProjectKind, ProjectYear, StoreError, Testimonial, TimelineEvent,
    ValidationError,
};
use uuid::Uuid;

const SEED_COUNTS: ContentCounts = ContentCounts {
    projects: 4,
    testimonials: 2,
    timeline_events: 5,
    skills: 6,
    achievements: 4,
};

fn seeded() -> ContentStore {
    ContentStore::open_seeded().unwrap()
}

fn project(title: &str, kind: ProjectKind, year: ProjectYear) -> Project {
    Project::new(title, kind, year, "description", "https://example.com")
}

fn filter(label: &str) -> ProjectFilter {
    ProjectFilter::parse(label).unwrap()
}

#[test]
fn open_starts_empty_and_uninitialized() {
    let store = ContentStore::open().unwrap();
    assert!(!store.is_initialized());
    assert_eq!(store.counts().unwrap(), ContentCounts::default());
    assert_eq!(store.profile().unwrap(), ProfileFields::default());
}

#[test]
fn initialize_twice_keeps_seed_counts() {
    let mut store = ContentStore::open().unwrap();
    assert!(store.initialize().unwrap());
    assert!(!store.initialize().unwrap());

    assert!(store.is_initialized());
    assert_eq!(store.counts().unwrap(), SEED_COUNTS);
}

#[test]
fn writes_before_initialize_are_rejected_and_seed_stays_first() {
    let mut store = ContentStore::open().unwrap();
    let mine = project("Mine", ProjectKind::Individual, ProjectYear::Year1);

    let err = store.add_project(mine.clone()).unwrap_err();
    assert!(matches!(err, StoreError::NotInitialized));
    assert!(matches!(
        store.update_profile(ProfileFields::default()),
        Err(StoreError::NotInitialized)
    ));
    assert_eq!(store.counts().unwrap(), ContentCounts::default());

    store.initialize().unwrap();
    store.add_project(mine).unwrap();

    let titles: Vec<String> = store
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|record| record.item.title)
        .collect();
    assert_eq!(titles.first().map(String::as_str), Some("Data Analysis Project"));
    assert_eq!(titles.last().map(String::as_str), Some("Mine"));
}

#[test]
fn seed_content_matches_defaults() {
    let store = seeded();

    let titles: Vec<String> = store
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|record| record.item.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Data Analysis Project",
            "AI Chatbot",
            "Caritas CDJP Gikongoro Website",
            "AI-Based Student Attendance System",
        ]
    );

    let testimonials = store.list_testimonials().unwrap();
    assert_eq!(testimonials[0].item.name, "Dr. Theodore");
    assert_eq!(testimonials[1].item.role, "Classmate");

    let timeline = store.list_timeline_events().unwrap();
    assert_eq!(timeline.first().unwrap().item.year, "2023");
    assert_eq!(timeline.last().unwrap().item.year, "2025");

    let profile = store.profile().unwrap();
    assert_eq!(profile.name, "Fidella I.");
    assert_eq!(profile.university, "INES - Ruhengeri");
    assert!(profile.bio.starts_with("I am a passionate AI"));
    assert!(!profile.bio.contains("  "));
}

#[test]
fn add_project_appends_candidate_last() {
    let mut store = seeded();
    let before = store.list_projects().unwrap().len();
    let candidate = project("Compiler", ProjectKind::Individual, ProjectYear::Year1);

    let id = store.add_project(candidate.clone()).unwrap();

    let projects = store.list_projects().unwrap();
    assert_eq!(projects.len(), before + 1);
    let last = projects.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.item, candidate);
}

#[test]
fn duplicate_titles_are_permitted() {
    let mut store = seeded();
    let candidate = project("AI Chatbot", ProjectKind::Group, ProjectYear::Year3);
    let first = store.add_project(candidate.clone()).unwrap();
    let second = store.add_project(candidate).unwrap();

    assert_ne!(first, second);
    let chatbot_count = store
        .list_projects()
        .unwrap()
        .iter()
        .filter(|record| record.item.title == "AI Chatbot")
        .count();
    assert_eq!(chatbot_count, 3);
}

#[test]
fn add_project_with_blank_title_leaves_collection_unchanged() {
    let mut store = seeded();
    let before = store.list_projects().unwrap();

    let candidate = Project::new(
        "",
        ProjectKind::Group,
        ProjectYear::Year1,
        "x",
        "https://example.com",
    );
    let err = store.add_project(candidate).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ref validation) if *validation == ValidationError::blank("title")
    ));
    assert_eq!(store.list_projects().unwrap(), before);
}

#[test]
fn add_project_with_whitespace_description_is_rejected() {
    let mut store = seeded();
    let candidate = Project::new("T", ProjectKind::Group, ProjectYear::Year1, " \t ", "");
    let err = store.add_project(candidate).unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref v) if v.field == "description"));
    assert_eq!(store.counts().unwrap().projects, SEED_COUNTS.projects);
}

#[test]
fn filter_matches_year_or_type() {
    let store = seeded();

    let year3 = store.filter_projects(&filter("Year 3")).unwrap();
    assert_eq!(year3.len(), 2);
    assert!(year3
        .iter()
        .all(|record| record.item.year == ProjectYear::Year3));

    assert_eq!(store.filter_projects(&ProjectFilter::All).unwrap().len(), 4);

    let group = store.filter_projects(&filter("Group")).unwrap();
    assert_eq!(group.len(), 1);
    assert_eq!(group[0].item.title, "AI Chatbot");

    assert!(store
        .filter_projects(&filter("Class Assignment"))
        .unwrap()
        .is_empty());
}

#[test]
fn filter_preserves_insertion_order() {
    let mut store = seeded();
    store
        .add_project(project("Late Y3", ProjectKind::Individual, ProjectYear::Year3))
        .unwrap();

    let titles: Vec<String> = store
        .filter_projects(&filter("Year 3"))
        .unwrap()
        .into_iter()
        .map(|record| record.item.title)
        .collect();
    assert_eq!(
        titles,
        vec!["AI Chatbot", "Caritas CDJP Gikongoro Website", "Late Y3"]
    );
}

#[test]
fn available_filters_on_seed_data() {
    let store = seeded();
    let labels: Vec<&str> = store
        .available_project_filters()
        .unwrap()
        .iter()
        .map(ProjectFilter::label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Final Year",
            "Year 2",
            "Year 3",
            "Dissertation",
            "Group",
            "Individual",
            "Internship"
        ]
    );
}

#[test]
fn available_filters_follow_added_content() {
    let mut store = seeded();
    store
        .add_project(project("Lab", ProjectKind::ClassAssignment, ProjectYear::Year1))
        .unwrap();

    let filters = store.available_project_filters().unwrap();
    assert!(filters.contains(&ProjectFilter::Year(ProjectYear::Year1)));
    assert!(filters.contains(&ProjectFilter::Kind(ProjectKind::ClassAssignment)));
    assert_eq!(filters.len(), 10);
}

#[test]
fn add_testimonial_and_timeline_event_append_last() {
    let mut store = seeded();

    let testimonial = Testimonial::new("Ana", "", "Reliable teammate.");
    let testimonial_id = store.add_testimonial(testimonial.clone()).unwrap();
    let testimonials = store.list_testimonials().unwrap();
    assert_eq!(testimonials.len(), SEED_COUNTS.testimonials + 1);
    assert_eq!(testimonials.last().unwrap().id, testimonial_id);
    assert_eq!(testimonials.last().unwrap().item, testimonial);

    let event = TimelineEvent::new("2026", "Graduation", "");
    store.add_timeline_event(event.clone()).unwrap();
    let timeline = store.list_timeline_events().unwrap();
    assert_eq!(timeline.len(), SEED_COUNTS.timeline_events + 1);
    assert_eq!(timeline.last().unwrap().item, event);
}

#[test]
fn invalid_testimonial_and_timeline_event_are_rejected() {
    let mut store = seeded();

    let err = store
        .add_testimonial(Testimonial::new("Ana", "Mentor", ""))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref v) if v.field == "text"));

    let err = store
        .add_timeline_event(TimelineEvent::new("", "Graduation", "x"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref v) if v.field == "year"));

    assert_eq!(store.counts().unwrap(), SEED_COUNTS);
}

#[test]
fn update_profile_overwrites_all_fields_including_blanks() {
    let mut store = seeded();
    let fields = ProfileFields {
        name: "New Name".to_string(),
        location: String::new(),
        field_of_study: "MSc".to_string(),
        university: String::new(),
        bio: String::new(),
    };

    store.update_profile(fields.clone()).unwrap();
    assert_eq!(store.profile().unwrap(), fields);

    store.update_profile(ProfileFields::default()).unwrap();
    assert_eq!(store.profile().unwrap(), ProfileFields::default());
}

#[test]
fn update_and_delete_project_by_id() {
    let mut store = seeded();
    let target = store.list_projects().unwrap()[1].id;

    let replacement = project("Chatbot v2", ProjectKind::Group, ProjectYear::FinalYear);
    store.update_project(target, replacement.clone()).unwrap();
    let projects = store.list_projects().unwrap();
    assert_eq!(projects[1].id, target);
    assert_eq!(projects[1].item, replacement);

    let err = store
        .update_project(target, project("", ProjectKind::Group, ProjectYear::Year1))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get_project(target).unwrap().unwrap().item, replacement);

    store.delete_project(target).unwrap();
    assert!(store.get_project(target).unwrap().is_none());
    assert_eq!(store.list_projects().unwrap().len(), SEED_COUNTS.projects - 1);
}

#[test]
fn update_and_delete_unknown_ids_report_not_found() {
    let mut store = seeded();
    let missing = Uuid::new_v4();

    assert!(matches!(
        store.delete_project(missing),
        Err(StoreError::ItemNotFound(id)) if id == missing
    ));
    assert!(matches!(
        store.update_testimonial(missing, Testimonial::new("a", "", "b")),
        Err(StoreError::ItemNotFound(_))
    ));
    assert!(matches!(
        store.delete_timeline_event(missing),
        Err(StoreError::ItemNotFound(_))
    ));
    assert_eq!(store.counts().unwrap(), SEED_COUNTS);
}

#[test]
fn update_and_delete_testimonial_and_timeline_event() {
    let mut store = seeded();

    let testimonial_id = store.list_testimonials().unwrap()[0].id;
    let replacement = Testimonial::new("Dr. T", "Supervisor", "Updated quote.");
    store
        .update_testimonial(testimonial_id, replacement.clone())
        .unwrap();
    assert_eq!(store.list_testimonials().unwrap()[0].item, replacement);
    store.delete_testimonial(testimonial_id).unwrap();
    assert_eq!(store.list_testimonials().unwrap().len(), 1);

    let event_id = store.list_timeline_events().unwrap()[4].id;
    let event = TimelineEvent::new("2025", "Dissertation submitted", "");
    store.update_timeline_event(event_id, event.clone()).unwrap();
    assert_eq!(store.list_timeline_events().unwrap()[4].item, event);
    store.delete_timeline_event(event_id).unwrap();
    assert_eq!(store.list_timeline_events().unwrap().len(), 4);
}

#[test]
fn skill_levels_are_bounded_and_matched_by_name() {
    let mut store = seeded();

    store.set_skill_level("SQL", 95).unwrap();
    let sql = store
        .list_skills()
        .unwrap()
        .into_iter()
        .find(|skill| skill.name == "SQL")
        .unwrap();
    assert_eq!(sql.level, 95);

    let err = store.set_skill_level("SQL", 101).unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref v) if v.field == "level"));

    let err = store.set_skill_level("Cobol", 10).unwrap_err();
    assert!(matches!(err, StoreError::UnknownSkill(ref name) if name == "Cobol"));
}

#[test]
fn achievements_append_and_require_text() {
    let mut store = seeded();
    store
        .add_achievement(Achievement::new("Rust certification"))
        .unwrap();
    let achievements = store.list_achievements().unwrap();
    assert_eq!(achievements.len(), SEED_COUNTS.achievements + 1);
    assert_eq!(achievements.last().unwrap().item.text, "Rust certification");

    assert!(store.add_achievement(Achievement::new("  ")).is_err());
}

#[test]
fn contact_message_is_acknowledged_but_not_stored() {
    let store = seeded();
    let before = store.counts().unwrap();

    let receipt =
        store.submit_contact_message(ContactMessage::new("Ana", "ana@example.com", "Hello!"));
    assert_eq!(receipt.message_chars, 6);
    assert_eq!(store.counts().unwrap(), before);
}

#[test]
fn blank_contact_message_is_still_acknowledged() {
    let store = seeded();
    let before = store.counts().unwrap();

    let first = store.submit_contact_message(ContactMessage::new("", "", ""));
    let second = store.submit_contact_message(ContactMessage::new("Ana", "", "  "));
    assert_eq!(first.message_chars, 0);
    assert_ne!(first.receipt_id, second.receipt_id);
    assert_eq!(store.counts().unwrap(), before);
}

#[test]
fn contact_links_are_static() {
    let store = ContentStore::open().unwrap();
    let labels: Vec<String> = store
        .contact_links()
        .into_iter()
        .map(|link| link.label)
        .collect();
    assert_eq!(labels, vec!["Email", "LinkedIn", "GitHub", "Personal Website"]);
}

#[test]
fn independent_stores_do_not_share_content() {
    let mut first = seeded();
    let second = seeded();

    first
        .add_testimonial(Testimonial::new("Ana", "", "Great"))
        .unwrap();

    assert_eq!(first.list_testimonials().unwrap().len(), 3);
    assert_eq!(second.list_testimonials().unwrap().len(), 2);
}

#[test]
fn end_to_end_add_and_filter_new_year() {
    let mut store = ContentStore::open().unwrap();
    store.initialize().unwrap();

    let candidate =
        Project::from_labels("X", "Group", "Year 1", "d", "http://e").unwrap();
    store.add_project(candidate.clone()).unwrap();

    let projects = store.list_projects().unwrap();
    assert_eq!(projects.len(), 5);
    assert_eq!(projects.last().unwrap().item, candidate);

    let year1 = store.filter_projects(&filter("Year 1")).unwrap();
    assert_eq!(year1.len(), 1);
    assert_eq!(year1[0].item, candidate);
}

#[test]
fn project_listing_can_be_replayed_and_filtered_lazily() {
    let store = seeded();
    let snapshot = store.list_projects().unwrap();

    let first_pass: Vec<_> = snapshot.iter().map(|record| record.id).collect();
    let second_pass: Vec<_> = snapshot.iter().map(|record| record.id).collect();
    assert_eq!(first_pass, second_pass);

    let year3 = filter("Year 3");
    let lazy: Vec<_> = year3.apply(&snapshot).cloned().collect();
    assert_eq!(lazy, store.filter_projects(&year3).unwrap());
    assert_eq!(store.list_projects().unwrap(), snapshot);
}
