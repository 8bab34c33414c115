use crate::{
    Config,
    calendar::{
        MoodDayData, build_mood_map, days_in_month, group_by_week_starting_monday,
        mood_distribution,
    },
    clock::{Clock, SystemClock},
    entry::JournalEntry,
    error::QueryError,
    filter::{FilterSpec, filter_and_sort},
    mood::Mood,
    params::parse_query_string,
    store::EntryStore,
    tags::{TagCount, available_tags, tag_counts},
};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The mood map, already split into Monday-first weeks.
#[derive(Debug)]
pub struct MoodMap {
    pub weeks: Vec<Vec<MoodDayData>>,
    /// Moods of the days inside the window, one per day with a recap.
    pub distribution: Vec<(Mood, usize)>,
}

/// Ties the config, the entry snapshot and the clock together for callers
/// that do not want to thread them through every call.
pub struct Recapz {
    pub config: Config,
    pub store: EntryStore,
    clock: Box<dyn Clock>,
}

impl Recapz {
    /// Loads configuration from standard paths and hydrates the store from
    /// the configured cache file. Problems with individual records come back
    /// next to the instance.
    pub fn new() -> Result<(Self, Vec<QueryError>)> {
        let config = Config::load()?;
        let mut recapz = Self::with_config(config, Box::new(SystemClock));
        let errors = recapz.store.hydrate();
        Ok((recapz, errors))
    }

    /// Creates an instance with a specific `Config` and clock. The store is
    /// not hydrated yet.
    pub fn with_config(config: Config, clock: Box<dyn Clock>) -> Self {
        let store = EntryStore::new(config.entries_file.clone());
        Self {
            config,
            store,
            clock,
        }
    }

    /// Filtered, most-recent-first view of the store.
    pub fn search(&self, spec: &FilterSpec) -> Vec<JournalEntry> {
        filter_and_sort(self.store.entries(), spec, self.clock.now())
    }

    /// Filters from the `default_filters` config key, or the default spec.
    pub fn default_filters(&self) -> FilterSpec {
        self.config
            .default_filters
            .as_deref()
            .map(parse_query_string)
            .unwrap_or_default()
    }

    /// Tag facets, always computed from the whole store.
    pub fn available_tags(&self) -> BTreeSet<String> {
        available_tags(self.store.entries())
    }

    pub fn tag_counts(&self) -> Vec<TagCount> {
        tag_counts(self.store.entries())
    }

    /// Mood map of the last `days` days (config default when `None`).
    pub fn mood_map(&self, days: Option<u32>) -> MoodMap {
        let days = days.unwrap_or(self.config.mood_map_days);
        let map = build_mood_map(self.store.entries(), days, self.clock.today());
        MoodMap {
            weeks: group_by_week_starting_monday(&map),
            distribution: mood_distribution(map.iter().filter_map(|day| day.mood)),
        }
    }

    /// Month grid for `anchor`, or for the current month.
    pub fn month_grid(&self, anchor: Option<NaiveDate>) -> Vec<Option<NaiveDate>> {
        days_in_month(anchor.unwrap_or_else(|| self.clock.today()))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
