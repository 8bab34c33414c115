//! `FilterSpec` <-> URL query parameters, so a filtered view can be bookmarked.
//!
//! Only `dateRange`, `mood` and `hasPhoto` travel in the URL. The free-text
//! query and selected tags stay local to the session.

use crate::filter::{DateRange, FilterSpec, MoodFilter, PhotoFilter};

pub const DATE_RANGE_PARAM: &str = "dateRange";
pub const MOOD_PARAM: &str = "mood";
pub const HAS_PHOTO_PARAM: &str = "hasPhoto";

/// Builds a `FilterSpec` from `(key, value)` pairs.
///
/// Unknown keys are ignored and unknown values leave the field at its
/// default, so a hand-edited URL never breaks the view. When a key repeats,
/// the last occurrence wins.
pub fn filters_from_params<I, K, V>(params: I) -> FilterSpec
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut spec = FilterSpec::default();
    for (key, value) in params {
        let value = value.as_ref();
        match key.as_ref() {
            DATE_RANGE_PARAM => spec.date_range = DateRange::from_param(value),
            MOOD_PARAM => spec.mood = MoodFilter::from_param(value),
            HAS_PHOTO_PARAM => spec.has_photo = PhotoFilter::from_param(value),
            _ => {}
        }
    }
    spec
}

/// Parses a raw query string such as `?dateRange=week&mood=good`.
pub fn parse_query_string(query: &str) -> FilterSpec {
    let query = query.trim().trim_start_matches('?');
    let pairs = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")));
    filters_from_params(pairs)
}

/// Serializes the URL-backed fields of `spec`, leaving out defaults.
/// The default spec gives an empty string.
pub fn to_query_string(spec: &FilterSpec) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if spec.date_range != DateRange::All {
        pairs.push(format!("{DATE_RANGE_PARAM}={}", spec.date_range));
    }
    if spec.mood != MoodFilter::All {
        pairs.push(format!("{MOOD_PARAM}={}", spec.mood.as_param()));
    }
    if spec.has_photo != PhotoFilter::All {
        pairs.push(format!("{HAS_PHOTO_PARAM}={}", spec.has_photo));
    }
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use std::collections::HashMap;

    #[test]
    fn bogus_values_give_the_default_spec() {
        let params = HashMap::from([("dateRange", "bogus"), ("mood", "xyz")]);
        assert_eq!(filters_from_params(params), FilterSpec::default());
    }

    #[test]
    fn recognized_values_are_applied() {
        let spec = filters_from_params([
            ("dateRange", "month"),
            ("mood", "terrible"),
            ("hasPhoto", "yes"),
        ]);
        assert_eq!(spec.date_range, DateRange::Month);
        assert_eq!(spec.mood, MoodFilter::Only(Mood::Terrible));
        assert_eq!(spec.has_photo, PhotoFilter::Yes);
        assert!(spec.query.is_empty());
        assert!(spec.tags.is_empty());
    }

    #[test]
    fn query_and_tags_are_not_read_from_params() {
        let spec = filters_from_params([("query", "gym"), ("tags", "work")]);
        assert!(spec.is_default());
    }

    #[test]
    fn raw_query_string_tolerates_noise() {
        let spec = parse_query_string("?mood=good&&dateRange&hasPhoto=no&utm_source=x");
        assert_eq!(spec.mood, MoodFilter::Only(Mood::Good));
        assert_eq!(spec.date_range, DateRange::All);
        assert_eq!(spec.has_photo, PhotoFilter::No);
    }

    #[test]
    fn empty_query_string_is_default() {
        assert!(parse_query_string("").is_default());
        assert!(parse_query_string("?").is_default());
    }

    #[test]
    fn defaults_are_left_out_of_the_url() {
        assert_eq!(to_query_string(&FilterSpec::default()), "");
        let spec = FilterSpec {
            date_range: DateRange::Week,
            has_photo: PhotoFilter::Yes,
            ..Default::default()
        };
        assert_eq!(to_query_string(&spec), "dateRange=week&hasPhoto=yes");
    }

    #[test]
    fn serialized_url_parses_back() {
        let spec = FilterSpec {
            date_range: DateRange::Year,
            mood: MoodFilter::Only(Mood::Neutral),
            has_photo: PhotoFilter::No,
            ..Default::default()
        };
        assert_eq!(parse_query_string(&to_query_string(&spec)), spec);
    }
}
