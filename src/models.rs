//! Frontend Models
//!
//! Page routing plus display helpers for store entities.

use chrono::{DateTime, NaiveDate, Utc};

pub use grid_store::{Note, Project, ProjectStatus, ProjectType};

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    BrainDump,
    Projects,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::BrainDump, Page::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::BrainDump => "Brain Dump",
            Page::Projects => "Projects",
        }
    }
}

/// CSS class for a status badge
pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Idea => "status-badge status-idea",
        ProjectStatus::Scripted => "status-badge status-scripted",
        ProjectStatus::Filming => "status-badge status-filming",
        ProjectStatus::Editing => "status-badge status-editing",
        ProjectStatus::Uploaded => "status-badge status-uploaded",
        ProjectStatus::Published => "status-badge status-published",
    }
}

/// Whether the home page asks for a name instead of greeting
pub fn needs_name_prompt(editing: bool, name: &str) -> bool {
    editing || name.trim().is_empty()
}

/// "1 note" / "3 notes"
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Projects per status, in workflow order, skipping empty statuses
pub fn status_counts(projects: &[Project]) -> Vec<(ProjectStatus, usize)> {
    ProjectStatus::ALL
        .iter()
        .map(|status| {
            let count = projects.iter().filter(|p| p.status == *status).count();
            (*status, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// "3 hours ago" style age
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    let (value, unit) = match secs {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (secs / 60, "minute"),
        3_600..=86_399 => (secs / 3_600, "hour"),
        86_400..=2_591_999 => (secs / 86_400, "day"),
        2_592_000..=31_535_999 => (secs / 2_592_000, "month"),
        _ => (secs / 31_536_000, "year"),
    };
    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// Value for an `<input type="date">`
pub fn format_date_input(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an `<input type="date">` value; blank clears the date
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
