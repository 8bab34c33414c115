use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use recap_core::{
    DateRange, FilterSpec, MoodFilter, PhotoFilter, calendar::MAX_WINDOW_DAYS,
    dates::parse_timestamp, params::parse_query_string,
};
use std::path::PathBuf;

use crate::render::ColorMode;

/// recap — search your recaps and see how the days went
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
    /// Entry cache to read instead of the configured `entries_file`.
    #[arg(long, env = "RECAP_ENTRIES", global = true)]
    pub entries: Option<PathBuf>,
    /// Evaluate date ranges as if it were this moment (e.g. `2024-06-20T18:00:00`).
    #[arg(long, value_parser = parse_now, global = true)]
    pub now: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List entries matching the filters, most recent first.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Only shows date, mood, first line and tags of each entry.
        #[arg(long, short)]
        short: bool,
    },
    /// Prints every tag used by any entry.
    Tags {
        /// Also print how many entries use each tag.
        #[arg(long)]
        counts: bool,
    },
    /// Shows the mood of each day over the last days, one row per week.
    Moodmap {
        /// Window length in days (defaults to `mood_map_days` from config).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
        days: Option<u32>,
    },
    /// Shows a month as a Monday-first calendar grid.
    Calendar {
        /// Month to show, as `YYYY-MM`. Defaults to the current month.
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,
    },
    /// Prints the shareable query string for the given filters.
    Url {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Filter flags. Enum values are not validated by clap: unknown values mean
/// "all", the same way a bad URL parameter does.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text search (e.g., `recap list -q gym`).
    #[arg(long, short)]
    pub query: Option<String>,
    /// One of great, good, neutral, bad, terrible or all.
    #[arg(long, short)]
    pub mood: Option<String>,
    /// yes, no or all.
    #[arg(long)]
    pub photo: Option<String>,
    /// today, week, month, year or all.
    #[arg(long, short)]
    pub range: Option<String>,
    /// Keep entries with any of these tags (e.g., `recap list -t gym -t work`).
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,
    /// A query string such as `dateRange=week&mood=good`. Other flags override it.
    #[arg(long)]
    pub params: Option<String>,
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.mood.is_none()
            && self.photo.is_none()
            && self.range.is_none()
            && self.tags.is_empty()
            && self.params.is_none()
    }

    /// Builds the spec on top of `base`, or on top of `--params` when given.
    pub fn to_spec(&self, base: FilterSpec) -> FilterSpec {
        let mut spec = match &self.params {
            Some(params) => parse_query_string(params),
            None => base,
        };
        if let Some(query) = &self.query {
            spec.query = query.clone();
        }
        if let Some(mood) = &self.mood {
            spec.mood = MoodFilter::from_param(mood);
        }
        if let Some(photo) = &self.photo {
            spec.has_photo = PhotoFilter::from_param(photo);
        }
        if let Some(range) = &self.range {
            spec.date_range = DateRange::from_param(range);
        }
        spec.tags.extend(self.tags.iter().cloned());
        spec
    }
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(s).ok_or_else(|| format!("`{s}` is not a date or date-time"))
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("`{s}` is not a month, expected YYYY-MM"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use recap_core::Mood;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_build_a_spec() {
        let cli = Cli::try_parse_from([
            "recap", "list", "-q", "Gym", "-m", "good", "-r", "week", "-t", "gym", "-t", "work",
        ])
        .unwrap();
        let Command::List { filters, short } = cli.command else {
            panic!("expected list");
        };
        assert!(!short);
        let spec = filters.to_spec(FilterSpec::default());
        assert_eq!(spec.query, "Gym");
        assert_eq!(spec.mood, MoodFilter::Only(Mood::Good));
        assert_eq!(spec.date_range, DateRange::Week);
        assert_eq!(spec.tags.len(), 2);
    }

    #[test]
    fn bad_enum_flags_degrade_to_all() {
        let cli = Cli::try_parse_from(["recap", "list", "--mood", "meh", "--photo", "maybe"])
            .unwrap();
        let Command::List { filters, .. } = cli.command else {
            panic!("expected list");
        };
        assert!(filters.to_spec(FilterSpec::default()).is_default());
    }

    #[test]
    fn flags_override_params() {
        let args = FilterArgs {
            params: Some("dateRange=year&mood=bad".to_string()),
            mood: Some("great".to_string()),
            ..Default::default()
        };
        let spec = args.to_spec(FilterSpec::default());
        assert_eq!(spec.date_range, DateRange::Year);
        assert_eq!(spec.mood, MoodFilter::Only(Mood::Great));
    }

    #[test]
    fn global_now_and_month() {
        let cli = Cli::try_parse_from([
            "recap",
            "calendar",
            "--month",
            "2024-05",
            "--now",
            "2024-06-20T18:00:00",
        ])
        .unwrap();
        assert_eq!(
            cli.now,
            NaiveDate::from_ymd_opt(2024, 6, 20).and_then(|d| d.and_hms_opt(18, 0, 0))
        );
        let Command::Calendar { month } = cli.command else {
            panic!("expected calendar");
        };
        assert_eq!(month, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn bad_month_is_rejected() {
        assert!(Cli::try_parse_from(["recap", "calendar", "--month", "May"]).is_err());
    }

    #[test]
    fn mood_map_window_is_bounded() {
        let cli = Cli::try_parse_from(["recap", "moodmap", "--days", "3660"]).unwrap();
        assert!(matches!(cli.command, Command::Moodmap { days: Some(3660) }));

        for days in ["0", "3661", "4294967295"] {
            assert!(Cli::try_parse_from(["recap", "moodmap", "--days", days]).is_err());
        }
    }
}
