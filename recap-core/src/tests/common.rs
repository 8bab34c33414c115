use crate::{Config, JournalEntry, Mood};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(entries_file: PathBuf) -> Config {
    Config {
        entries_file,
        mood_map_days: 30,
        date_format: "%A, %d %b %Y".to_string(),
        default_filters: None,
    }
}

pub fn mk_entry(
    id: &str,
    created_at: &str,
    mood: Mood,
    text: &str,
    tags: &[&str],
) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        created_at: created_at.to_string(),
        mood,
        text: text.to_string(),
        photo_url: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_pinned: false,
        blocks: Vec::new(),
    }
}

pub fn mk_tags(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test timestamp")
}
