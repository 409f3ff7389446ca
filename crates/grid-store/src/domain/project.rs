//! Project Entity
//!
//! A piece of content moving from idea to publication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, OrderedEntity};

/// Project format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "Short Form")]
    ShortForm,
    #[serde(rename = "Long Form")]
    LongForm,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::ShortForm, ProjectType::LongForm];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::ShortForm => "Short Form",
            ProjectType::LongForm => "Long Form",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Production stage, in workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Idea,
    Scripted,
    Filming,
    Editing,
    Uploaded,
    Published,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        ProjectStatus::Idea,
        ProjectStatus::Scripted,
        ProjectStatus::Filming,
        ProjectStatus::Editing,
        ProjectStatus::Uploaded,
        ProjectStatus::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Idea => "Idea",
            ProjectStatus::Scripted => "Scripted",
            ProjectStatus::Filming => "Filming",
            ProjectStatus::Editing => "Editing",
            ProjectStatus::Uploaded => "Uploaded",
            ProjectStatus::Published => "Published",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// A content project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    /// Working title, trimmed and never empty
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Input for a new project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub project_type: ProjectType,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            title: title.into(),
            project_type,
        }
    }
}

/// Partial update for a project. Id, creation time and order are not editable.
///
/// `publish_date: Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub project_type: Option<ProjectType>,
    pub script: Option<String>,
    pub status: Option<ProjectStatus>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
}

impl ProjectPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn publish_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.publish_date = Some(date);
        self
    }
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OrderedEntity for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn from_draft(draft: ProjectDraft, id: String, now: DateTime<Utc>) -> Option<Self> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            id,
            title: title.to_string(),
            project_type: draft.project_type,
            script: String::new(),
            status: ProjectStatus::Idea,
            publish_date: None,
            created_at: now,
            updated_at: None,
            order: Some(0),
        })
    }

    fn apply(&mut self, patch: ProjectPatch) -> bool {
        let title = match patch.title.as_deref().map(str::trim) {
            Some("") => return false,
            other => other.map(str::to_string),
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(project_type) = patch.project_type {
            self.project_type = project_type;
        }
        if let Some(script) = patch.script {
            self.script = script;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.publish_date {
            self.publish_date = date;
        }
        true
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = Some(order);
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn content(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::from_draft(
            ProjectDraft::new(" Launch video ", ProjectType::LongForm),
            "p1".to_string(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_project_defaults() {
        let p = project();
        assert_eq!(p.title, "Launch video");
        assert_eq!(p.status, ProjectStatus::Idea);
        assert_eq!(p.project_type, ProjectType::LongForm);
        assert!(p.script.is_empty());
        assert_eq!(p.order, Some(0));
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut p = project();
        let date = "2025-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert!(p.apply(ProjectPatch::default().status(ProjectStatus::Filming).publish_date(Some(date))));
        assert_eq!(p.status, ProjectStatus::Filming);
        assert_eq!(p.publish_date, Some(date));
        assert_eq!(p.title, "Launch video");

        assert!(p.apply(ProjectPatch::default().publish_date(None)));
        assert!(p.publish_date.is_none());
    }

    #[test]
    fn test_blank_title_rejects_whole_patch() {
        let mut p = project();
        let patch = ProjectPatch::default().title("   ").status(ProjectStatus::Published);
        assert!(!p.apply(patch));
        assert_eq!(p.status, ProjectStatus::Idea);
        assert_eq!(p.title, "Launch video");
    }

    #[test]
    fn test_wire_names() {
        let value = serde_json::to_value(project()).unwrap();
        assert_eq!(value["type"], "Long Form");
        assert_eq!(value["status"], "Idea");
        assert!(value.get("publishDate").is_none());

        assert_eq!(ProjectType::parse("Short Form"), Some(ProjectType::ShortForm));
        assert_eq!(ProjectStatus::parse("Uploaded"), Some(ProjectStatus::Uploaded));
        assert_eq!(ProjectStatus::parse("Done"), None);
    }
}
