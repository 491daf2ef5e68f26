//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage and print a plain-text digest of a freshly
//!   seeded session.
//! - Accept an optional project filter label as the first argument.

use folio_core::{ContentStore, FolioConfig, ProjectFilter, StoreResult};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = FolioConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref() {
        if let Err(err) = folio_core::init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let label = std::env::args().nth(1).unwrap_or_else(|| "All".to_string());
    let Some(filter) = ProjectFilter::parse(&label) else {
        eprintln!("unknown project filter `{label}`");
        return ExitCode::FAILURE;
    };

    match print_digest(&filter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio digest failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_digest(filter: &ProjectFilter) -> StoreResult<()> {
    let store = ContentStore::open_seeded()?;
    let profile = store.profile()?;
    println!();
    println!("{} | {} | {}", profile.name, profile.field_of_study, profile.university);

    let available: Vec<&str> = store
        .available_project_filters()?
        .iter()
        .map(ProjectFilter::label)
        .collect();
    println!("filters: {}", available.join(", "));

    let projects = store.filter_projects(filter)?;
    println!("projects [{filter}]: {}", projects.len());
    for record in &projects {
        let project = &record.item;
        println!(
            "  - {} ({}) [{}] {}",
            project.title,
            project.year.label(),
            project.kind.label(),
            project.link
        );
    }

    println!("timeline:");
    for record in store.list_timeline_events()? {
        println!("  {}: {}", record.item.year, record.item.event);
    }

    info!(
        "event=cli_digest module=cli status=ok filter={} projects={}",
        filter.label(),
        projects.len()
    );
    Ok(())
}
