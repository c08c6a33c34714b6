use crate::domain::{ReleaseDate, VersionPoint};
use crate::error::{ReleaseDateError, Result};
use chrono::{DateTime, FixedOffset};
use console::style;
use git2::Oid;
use serde::Serialize;

/// Machine readable form of a resolution
#[derive(Debug, Serialize)]
struct Report<'a> {
    release_date: &'a ReleaseDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_point: Option<&'a VersionPoint>,
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

fn format_point(label: &str, oid: Oid, date: &DateTime<FixedOffset>) -> String {
    format!(
        "  {:<9} {} {}",
        label,
        style(oid).yellow(),
        date.to_rfc3339()
    )
}

/// Human readable summary of a resolution
pub fn format_release_date(release_date: &ReleaseDate, point: Option<&VersionPoint>) -> String {
    let mut lines = vec![
        style("Release date").bold().to_string(),
        format_point("Current:", release_date.commit_id, &release_date.date),
        format_point(
            "Original:",
            release_date.original_commit_id,
            &release_date.original_date,
        ),
    ];

    match point {
        Some(point) => lines.push(format!(
            "  {:<9} {}",
            "Based on:",
            style(point.short_version()).green()
        )),
        None if release_date.is_own_origin() => lines.push(format!(
            "  {:<9} {}",
            "Based on:",
            style("commit is its own origin").dim()
        )),
        None => {}
    }

    lines.join("\n")
}

pub fn display_release_date(release_date: &ReleaseDate, point: Option<&VersionPoint>) {
    println!("{}", format_release_date(release_date, point));
}

/// TOML rendering of a resolution
pub fn render_toml(release_date: &ReleaseDate, point: Option<&VersionPoint>) -> Result<String> {
    toml::to_string(&Report {
        release_date,
        version_point: point,
    })
    .map_err(|e| ReleaseDateError::config(format!("Cannot render TOML: {}", e)))
}
