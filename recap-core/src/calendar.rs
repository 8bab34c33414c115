//! Day-bucketed views: the trailing mood map and the month grid.
//!
//! Both grids are Monday-first. Column 0 is Monday, column 6 is Sunday.

use crate::dates::{first_of_month, get_dates_in_range, monday_index};
use crate::entry::JournalEntry;
use crate::mood::Mood;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Longest mood map built, about ten years. Longer windows are clamped.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// One cell of the mood map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodDayData {
    pub date: NaiveDate,
    pub mood: Option<Mood>,
    pub has_recap: bool,
    /// Id of the entry shown for this day.
    pub card_id: Option<String>,
    /// Placeholder added to align the first week. Never navigable.
    pub is_padding: bool,
}

impl MoodDayData {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            has_recap: false,
            card_id: None,
            is_padding: false,
        }
    }

    fn padding(date: NaiveDate) -> Self {
        Self {
            is_padding: true,
            ..Self::empty(date)
        }
    }
}

/// One `MoodDayData` per day of the `window_days` days ending on `today`
/// (inclusive), oldest first. Windows past `MAX_WINDOW_DAYS` are clamped, and
/// the map never reaches before the earliest representable date.
///
/// The map expects one recap per day. When several entries share a local
/// date, the one appearing last in `entries` is shown. Entries whose
/// `created_at` does not parse are not placed on the map.
pub fn build_mood_map(
    entries: &[JournalEntry],
    window_days: u32,
    today: NaiveDate,
) -> Vec<MoodDayData> {
    if window_days == 0 {
        return Vec::new();
    }

    let mut by_day: HashMap<NaiveDate, &JournalEntry> = HashMap::new();
    for entry in entries {
        if let Some(date) = entry.local_date() {
            by_day.insert(date, entry);
        }
    }

    let span = Duration::days(i64::from(window_days.min(MAX_WINDOW_DAYS)) - 1);
    let start = today.checked_sub_signed(span).unwrap_or(NaiveDate::MIN);
    get_dates_in_range(start, today)
        .into_iter()
        .map(|date| match by_day.get(&date) {
            Some(entry) => MoodDayData {
                date,
                mood: Some(entry.mood),
                has_recap: true,
                card_id: Some(entry.id.clone()),
                is_padding: false,
            },
            None => MoodDayData::empty(date),
        })
        .collect()
}

/// Splits a chronological run of days into weeks of seven.
///
/// The first week is left-padded with placeholder days so the first real day
/// lands in its weekday column. The last week may be shorter than seven.
pub fn group_by_week_starting_monday(days: &[MoodDayData]) -> Vec<Vec<MoodDayData>> {
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let lead = i64::from(monday_index(first.date));
    let mut padded: Vec<MoodDayData> = (0..lead)
        .filter_map(|offset| first.date.checked_sub_signed(Duration::days(lead - offset)))
        .map(MoodDayData::padding)
        .collect();
    padded.extend(days.iter().cloned());

    padded.chunks(7).map(<[MoodDayData]>::to_vec).collect()
}

/// Month grid for the month containing `anchor`: a `None` for each weekday
/// before the 1st, then every date of the month. No trailing cells.
pub fn days_in_month(anchor: NaiveDate) -> Vec<Option<NaiveDate>> {
    let Some(first) = first_of_month(anchor) else {
        return Vec::new();
    };

    let lead = monday_index(first) as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    cells.extend(
        first
            .iter_days()
            .take_while(|date| date.month() == first.month())
            .map(Some),
    );
    cells
}

/// How often each mood occurs in `moods`, best mood first. Zero counts
/// included.
pub fn mood_distribution<I>(moods: I) -> Vec<(Mood, usize)>
where
    I: IntoIterator<Item = Mood>,
{
    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for mood in moods {
        *counts.entry(mood).or_default() += 1;
    }
    Mood::iter()
        .map(|mood| (mood, counts.get(&mood).copied().unwrap_or(0)))
        .collect()
}
