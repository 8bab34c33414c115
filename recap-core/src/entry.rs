use crate::dates::{parse_instant, parse_timestamp};
use crate::mood::Mood;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single day's recap as cached locally by the app.
///
/// Field names follow the camelCase layout of the cache file
/// (`createdAt`, `photoUrl`, `isPinned`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    /// ISO-8601 date or timestamp. Kept as written so one bad value only
    /// affects this entry.
    pub created_at: String,
    pub mood: Mood,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    /// Structured blocks, opaque to this crate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<serde_json::Value>,
}

impl JournalEntry {
    /// `created_at` resolved to local time, `None` if it does not parse.
    pub fn created_at_local(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    /// The instant `created_at` names, used for ordering.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.created_at)
    }

    /// The local calendar day this entry belongs to.
    pub fn local_date(&self) -> Option<NaiveDate> {
        self.created_at_local().map(|dt| dt.date())
    }

    /// An empty or blank `photo_url` counts as no photo.
    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
