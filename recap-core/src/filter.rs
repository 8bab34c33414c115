//! Narrowing and ordering of the entry collection.
//!
//! Everything here is pure: the entry slice is only read, the clock is passed
//! in as `now`, and the result is a fresh `Vec`.

use crate::dates::{first_of_month, first_of_year};
use crate::entry::JournalEntry;
use crate::mood::Mood;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// How far back entries are kept, counted in whole calendar days.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl DateRange {
    /// Parse-with-default: anything unknown is `All`.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Earliest local date still inside the range, `None` for `All`.
    ///
    /// `Week` goes back to midnight seven days ago, not a rolling 168 hours.
    pub fn since(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRange::Today => Some(today),
            DateRange::Week => today.checked_sub_signed(Duration::days(7)).or(Some(NaiveDate::MIN)),
            DateRange::Month => first_of_month(today),
            DateRange::Year => first_of_year(today),
            DateRange::All => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum PhotoFilter {
    Yes,
    No,
    #[default]
    All,
}

impl PhotoFilter {
    /// Parse-with-default: anything unknown is `All`.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    /// Parse-with-default: `all` and anything that is not a mood are `All`.
    pub fn from_param(value: &str) -> Self {
        Mood::from_str(value).map_or(MoodFilter::All, MoodFilter::Only)
    }

    pub fn as_param(&self) -> &str {
        match self {
            MoodFilter::All => "all",
            MoodFilter::Only(mood) => mood.as_ref(),
        }
    }
}

/// The active search criteria.
///
/// Treated as a value: the builder methods return a new spec instead of
/// editing one in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring of the entry text, surrounding whitespace
    /// ignored. Blank matches everything.
    pub query: String,
    pub mood: MoodFilter,
    pub has_photo: PhotoFilter,
    pub date_range: DateRange,
    /// An entry must carry at least one of these.
    pub tags: BTreeSet<String>,
}

impl FilterSpec {
    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Number of predicate categories that can exclude an entry.
    pub fn active_count(&self) -> usize {
        [
            !self.query.trim().is_empty(),
            self.mood != MoodFilter::All,
            self.has_photo != PhotoFilter::All,
            self.date_range != DateRange::All,
            !self.tags.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..self.clone()
        }
    }

    pub fn with_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.tags.insert(tag.to_string());
        next
    }

    pub fn without_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.tags.remove(tag);
        next
    }

    /// Selecting an already selected tag facet removes it.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        if self.tags.contains(tag) {
            self.without_tag(tag)
        } else {
            self.with_tag(tag)
        }
    }

    /// Whether `entry` passes every predicate, with `today` as the local date
    /// of evaluation.
    pub fn matches(&self, entry: &JournalEntry, today: NaiveDate) -> bool {
        Matcher::new(self, today).matches(entry)
    }
}

/// A `FilterSpec` with the per-pass work (query folding, range start) done once.
struct Matcher<'a> {
    spec: &'a FilterSpec,
    query: String,
    since: Option<NaiveDate>,
}

impl<'a> Matcher<'a> {
    fn new(spec: &'a FilterSpec, today: NaiveDate) -> Self {
        Self {
            spec,
            query: spec.query.trim().to_lowercase(),
            since: spec.date_range.since(today),
        }
    }

    fn matches(&self, entry: &JournalEntry) -> bool {
        self.matches_text(entry)
            && self.matches_mood(entry)
            && self.matches_photo(entry)
            && self.matches_date(entry)
            && self.matches_tags(entry)
    }

    fn matches_text(&self, entry: &JournalEntry) -> bool {
        self.query.is_empty() || entry.text.to_lowercase().contains(&self.query)
    }

    fn matches_mood(&self, entry: &JournalEntry) -> bool {
        match self.spec.mood {
            MoodFilter::All => true,
            MoodFilter::Only(mood) => entry.mood == mood,
        }
    }

    fn matches_photo(&self, entry: &JournalEntry) -> bool {
        match self.spec.has_photo {
            PhotoFilter::All => true,
            PhotoFilter::Yes => entry.has_photo(),
            PhotoFilter::No => !entry.has_photo(),
        }
    }

    fn matches_date(&self, entry: &JournalEntry) -> bool {
        let Some(since) = self.since else {
            return true;
        };
        match entry.local_date() {
            Some(date) => date >= since,
            None => {
                debug!(
                    id = %entry.id,
                    created_at = %entry.created_at,
                    "unparseable createdAt, entry left out of date range"
                );
                false
            }
        }
    }

    fn matches_tags(&self, entry: &JournalEntry) -> bool {
        self.spec.tags.is_empty() || entry.tags.iter().any(|tag| self.spec.tags.contains(tag))
    }
}

/// Returns the entries that pass every predicate of `spec`, in input order.
///
/// `now` is the local moment of evaluation; only its date is used.
pub fn filter_entries(
    entries: &[JournalEntry],
    spec: &FilterSpec,
    now: NaiveDateTime,
) -> Vec<JournalEntry> {
    let matcher = Matcher::new(spec, now.date());
    let filtered: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| matcher.matches(entry))
        .cloned()
        .collect();
    debug!(
        total = entries.len(),
        matched = filtered.len(),
        active_filters = spec.active_count(),
        "filtered entries"
    );
    filtered
}

/// Most recent instant first. Equal timestamps keep their input order,
/// entries whose `created_at` does not parse go last.
pub fn sort_entries(entries: &mut [JournalEntry]) {
    // sort_by_cached_key is stable
    entries.sort_by_cached_key(|entry| {
        let created_at = entry.created_at_utc();
        (created_at.is_none(), Reverse(created_at))
    });
}

/// `filter_entries` followed by `sort_entries`, the view every list shows.
pub fn filter_and_sort(
    entries: &[JournalEntry],
    spec: &FilterSpec,
    now: NaiveDateTime,
) -> Vec<JournalEntry> {
    let mut view = filter_entries(entries, spec, now);
    sort_entries(&mut view);
    view
}
