use crate::entry::JournalEntry;
use std::collections::{BTreeSet, HashMap};

/// A tag and the number of entries carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Every distinct tag in `entries`.
///
/// Meant to be called with the unfiltered collection, so that picking a tag
/// facet does not shrink the facet list. Nothing is cached.
pub fn available_tags(entries: &[JournalEntry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|entry| entry.tags.iter().cloned())
        .collect()
}

/// Tags with how many entries use them, most used first, ties by name.
/// A tag repeated on one entry counts once.
pub fn tag_counts(entries: &[JournalEntry]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        let distinct: BTreeSet<&str> = entry.tags.iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut result: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    result
}
