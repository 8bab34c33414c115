use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Timestamp layouts accepted besides RFC 3339, all read as local time.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a `created_at` value into a local date-time.
///
/// - RFC 3339 values carrying an offset (`2024-06-01T08:30:00Z`,
///   `2024-06-01T08:30:00+02:00`) are converted to the local timezone.
/// - Values without an offset are taken as local already.
/// - A bare `YYYY-MM-DD` resolves to local midnight of that day.
///
/// Returns `None` when nothing matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses a `created_at` value into the instant it names.
///
/// Offsets are honored as written. Values without one are read as local
/// time, taking the earlier instant when the local time is ambiguous and the
/// wall-clock value as UTC when it falls in a DST gap.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let local = parse_timestamp(raw)?;
    Some(match Local.from_local_datetime(&local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => local.and_utc(),
    })
}

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use recap_core::dates::get_dates_in_range;
/// let start_date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let end_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let dates = get_dates_in_range(start_date, end_date);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|date| *date <= end) {
        dates.push(date);
        current = date.succ_opt();
    }
    dates
}

/// Column of `date` in a Monday-first week: Monday is 0, Sunday is 6.
pub fn monday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// First day of the month `date` falls in.
pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// January 1 of the year `date` falls in.
pub fn first_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn bare_date_is_local_midnight() {
        let dt = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(dt, d(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetimes_are_kept_as_is() {
        let expected = d(2024, 6, 1).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-01T08:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-06-01T08:30:00.000").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-06-01 08:30").unwrap(), expected);
    }

    #[test]
    fn offsets_are_converted_to_local() {
        let raw = "2024-06-01T08:30:00.000Z";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_timestamp(raw), Some(expected));
    }

    #[test]
    fn instants_keep_the_written_offset() {
        let instant = parse_instant("2024-11-03T01:15:00-05:00").unwrap();
        assert_eq!(instant.naive_utc(), d(2024, 11, 3).and_hms_opt(6, 15, 0).unwrap());
        assert_eq!(parse_instant("nope"), None);
    }

    #[test]
    fn naive_instants_round_trip_through_local_time() {
        let instant = parse_instant("2024-06-01T08:30:00").unwrap();
        assert_eq!(
            instant.with_timezone(&Local).naive_local(),
            d(2024, 6, 1).and_hms_opt(8, 30, 0).unwrap()
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }

    #[test]
    fn range_crosses_year_boundary() {
        let dates = get_dates_in_range(d(2023, 12, 30), d(2024, 1, 2));
        assert_eq!(
            dates,
            vec![d(2023, 12, 30), d(2023, 12, 31), d(2024, 1, 1), d(2024, 1, 2)]
        );
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(get_dates_in_range(d(2024, 1, 2), d(2024, 1, 1)).is_empty());
    }

    #[test]
    fn range_ending_on_the_last_date_terminates() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        assert_eq!(
            get_dates_in_range(start, NaiveDate::MAX),
            vec![start, NaiveDate::MAX]
        );
    }

    #[test]
    fn sunday_is_last_column() {
        assert_eq!(monday_index(d(2024, 6, 3)), 0); // Monday
        assert_eq!(monday_index(d(2024, 6, 9)), 6); // Sunday
    }

    #[test]
    fn month_and_year_starts() {
        assert_eq!(first_of_month(d(2024, 2, 29)), Some(d(2024, 2, 1)));
        assert_eq!(first_of_year(d(2024, 2, 29)), Some(d(2024, 1, 1)));
    }
}
