mod calendar_mode;
mod list_mode;
mod moodmap_mode;
mod tags_mode;
mod url_mode;

pub use calendar_mode::calendar_mode;
pub use list_mode::list_mode;
pub use moodmap_mode::moodmap_mode;
pub use tags_mode::tags_mode;
pub use url_mode::url_mode;
