pub mod calendar;
pub mod clock;
pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod filter;
pub mod mood;
pub mod params;
pub mod recapz;
pub mod store;
pub mod tags;

#[cfg(test)]
mod tests;

pub use calendar::MoodDayData;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use entry::JournalEntry;
pub use error::QueryError;
pub use filter::{DateRange, FilterSpec, MoodFilter, PhotoFilter};
pub use mood::Mood;
pub use recapz::{MoodMap, Recapz};
pub use store::{EntryStore, QueryResult};
pub use tags::TagCount;
