use folio_core::{
    Achievement, ContactMessage, Project, ProjectKind, ProjectYear, Record, Skill, Testimonial,
    TimelineEvent, ValidationError, ValidationReason,
};
use uuid::Uuid;

#[test]
fn labels_round_trip_for_every_kind_and_year() {
    for kind in ProjectKind::ALL {
        assert_eq!(ProjectKind::from_label(kind.label()), Some(kind));
    }
    for year in ProjectYear::ALL {
        assert_eq!(ProjectYear::from_label(year.label()), Some(year));
    }
}

#[test]
fn year_and_kind_label_sets_are_disjoint() {
    for year in ProjectYear::ALL {
        assert_eq!(ProjectKind::from_label(year.label()), None);
    }
}

#[test]
fn project_from_labels_rejects_typos() {
    let err = Project::from_labels("t", "Grup", "Year 1", "d", "").unwrap_err();
    assert_eq!(err.field, "type");
    assert_eq!(err.reason, ValidationReason::UnknownLabel("Grup".to_string()));

    let err = Project::from_labels("t", "Group", "Year 5", "d", "").unwrap_err();
    assert_eq!(err.field, "year");
}

#[test]
fn project_from_labels_builds_typed_record() {
    let project =
        Project::from_labels("X", "Class Assignment", "Final Year", "d", "http://e").unwrap();
    assert_eq!(project.kind, ProjectKind::ClassAssignment);
    assert_eq!(project.year, ProjectYear::FinalYear);
}

#[test]
fn required_fields_are_checked_in_order() {
    let project = Project::new("", ProjectKind::Group, ProjectYear::Year1, "", "");
    assert_eq!(project.validate().unwrap_err(), ValidationError::blank("title"));

    let project = Project::new("x", ProjectKind::Group, ProjectYear::Year1, "  ", "");
    assert_eq!(
        project.validate().unwrap_err(),
        ValidationError::blank("description")
    );

    assert_eq!(
        Testimonial::new("", "Mentor", "text").validate().unwrap_err(),
        ValidationError::blank("name")
    );
    assert_eq!(
        Testimonial::new("Ana", "", "\n").validate().unwrap_err(),
        ValidationError::blank("text")
    );
    assert!(Testimonial::new("Ana", "", "Great").validate().is_ok());

    assert_eq!(
        TimelineEvent::new(" ", "event", "").validate().unwrap_err(),
        ValidationError::blank("year")
    );
    assert_eq!(
        TimelineEvent::new("2025", "", "").validate().unwrap_err(),
        ValidationError::blank("event")
    );

    assert_eq!(ContactMessage::new("Ana", "", "hi").blank_fields(), 1);
    assert_eq!(ContactMessage::new(" ", "", "\n").blank_fields(), 3);
    assert!(Achievement::new("").validate().is_err());
}

#[test]
fn skill_level_above_maximum_is_rejected() {
    let err = Skill::new("Rust", 101).validate().unwrap_err();
    assert_eq!(err.field, "level");
    assert!(!err.is_blank());
    assert!(Skill::new("Rust", 100).validate().is_ok());
}

#[test]
fn project_record_serializes_with_flattened_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = Record::new(
        id,
        Project::new(
            "AI Chatbot",
            ProjectKind::ClassAssignment,
            ProjectYear::Year1,
            "NLP",
            "https://example.com",
        ),
    );

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "AI Chatbot");
    assert_eq!(json["type"], "class_assignment");
    assert_eq!(json["year"], "year_1");

    let decoded: Record<Project> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}
