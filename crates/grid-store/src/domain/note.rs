//! Note Entity
//!
//! A brain dump note: a line of free text that can be pinned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, OrderedEntity, Pinnable};

/// A captured note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: String,
    /// Note text, trimmed and never empty
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Pinned notes always sort first
    #[serde(default)]
    pub pinned: bool,
    /// Display rank (missing in data saved by early versions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Partial update for a note
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub text: Option<String>,
}

impl NotePatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OrderedEntity for Note {
    type Draft = String;
    type Patch = NotePatch;

    fn from_draft(text: String, id: String, now: DateTime<Utc>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            created_at: now,
            updated_at: None,
            pinned: false,
            order: Some(0),
        })
    }

    fn apply(&mut self, patch: NotePatch) -> bool {
        if let Some(text) = patch.text {
            let text = text.trim();
            if text.is_empty() {
                return false;
            }
            self.text = text.to_string();
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
        &self.text
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

impl Pinnable for Note {
    fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}
