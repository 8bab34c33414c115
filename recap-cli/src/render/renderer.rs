use super::theme::OneDark;
use chrono::{Datelike, NaiveDate};
use recap_core::{
    JournalEntry, Mood, MoodDayData, MoodMap, QueryError, TagCount, dates::monday_index,
};
use std::collections::{BTreeSet, HashMap};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text
        }
    }

    pub fn print_entry_line(&self, entry: &JournalEntry) {
        let date = match entry.local_date() {
            Some(date) => date.to_string(),
            None => entry.created_at.clone(),
        };
        let first_line = entry.text.lines().next().unwrap_or("").trim().to_string();
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}]", entry.tags.join(", "));
        }
        println!(
            "{} {} - {} {}",
            self.paint(date, Color::Cyan),
            self.paint(entry.mood.to_string(), OneDark::mood_color(entry.mood)),
            self.paint(first_line, Color::Yellow),
            self.paint(tags, Color::Green),
        );
    }

    pub fn print_entries(&self, entries: &[JournalEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }

            let when = match entry.created_at_local() {
                Some(dt) => format!(
                    "{} {}",
                    dt.format(&self.opts.date_format),
                    dt.format("%H:%M")
                ),
                None => entry.created_at.clone(),
            };
            let pin = if entry.is_pinned { " (pinned)" } else { "" };
            let mut md = format!("## {when}: {}{pin}\n", entry.mood);
            if !entry.text.trim().is_empty() {
                md.push_str(entry.text.trim_end());
                md.push('\n');
            }
            if let Some(url) = entry.photo_url.as_deref().filter(|_| entry.has_photo()) {
                md.push_str(&format!("*photo: {url}*\n"));
            }
            if !entry.tags.is_empty() {
                let tags: Vec<String> = entry.tags.iter().map(|t| format!("`#{t}`")).collect();
                md.push_str(&tags.join(" "));
                md.push('\n');
            }
            self.print_md(&md);

            if i + 1 < entries.len() {
                self.print_md("---");
            }
        }
    }

    pub fn print_tags(&self, tags: &BTreeSet<String>) {
        for tag in tags {
            println!("{}", self.paint(format!("#{tag}"), Color::Green));
        }
    }

    pub fn print_tag_counts(&self, counts: &[TagCount]) {
        let width = counts.iter().map(|c| c.tag.len()).max().unwrap_or(0) + 1;
        for count in counts {
            let tag = format!("#{:<width$}", count.tag);
            println!("{} {}", self.paint(tag, Color::Green), count.count);
        }
    }

    fn mood_cell(&self, mood: Option<Mood>) -> String {
        match mood {
            Some(mood) if self.opts.use_color => {
                "██".to_string().with(OneDark::mood_color(mood)).to_string()
            }
            Some(mood) => format!(" {}", OneDark::mood_glyph(mood)),
            None => " .".to_string(),
        }
    }

    pub fn print_mood_map(&self, map: &MoodMap) {
        println!("{WEEKDAY_HEADER}");
        for week in &map.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|day: &MoodDayData| {
                    if day.is_padding {
                        "  ".to_string()
                    } else {
                        self.mood_cell(day.mood)
                    }
                })
                .collect();
            println!("{}", cells.join(" "));
        }
        println!();

        let total: usize = map.distribution.iter().map(|(_, n)| n).sum();
        for (mood, count) in &map.distribution {
            let label = format!("{:<9}", mood.to_string());
            println!(
                "{} {} {count}/{total}",
                self.mood_cell(Some(*mood)),
                self.paint(label, OneDark::mood_color(*mood)),
            );
        }
    }

    /// `days` marks the dates that have a recap.
    pub fn print_month_grid(
        &self,
        grid: &[Option<NaiveDate>],
        days: &HashMap<NaiveDate, MoodDayData>,
    ) {
        if let Some(first) = grid.iter().flatten().next() {
            self.print_md(&format!("# {}", first.format("%B %Y")));
        }
        println!("{WEEKDAY_HEADER}");

        let mut line: Vec<String> = Vec::new();
        for cell in grid {
            let text = match cell {
                None => "  ".to_string(),
                Some(date) => {
                    let number = format!("{:>2}", date.day());
                    match days.get(date).and_then(|day| day.mood) {
                        Some(mood) => self.paint(number, OneDark::mood_color(mood)),
                        None => self.paint(number, OneDark::COMMENT),
                    }
                }
            };
            line.push(text);
            if let Some(date) = cell {
                if monday_index(*date) == 6 {
                    println!("{}", line.join(" "));
                    line.clear();
                }
            }
        }
        if !line.is_empty() {
            println!("{}", line.join(" "));
        }
    }

    pub fn print_errors(&self, errors: &[QueryError]) {
        self.print_md("\n# Errors:");
        for error in errors {
            self.print_md(&format!("* {error}"));
        }
    }
}
