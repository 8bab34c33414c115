use crate::calendar::MAX_WINDOW_DAYS;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

const DEFAULT_MOOD_MAP_DAYS: u32 = 30;
const DEFAULT_DATE_FORMAT: &str = "%A, %d %b %Y";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON cache of entries kept by the app's sync layer.
    pub entries_file: PathBuf,
    /// Length of the trailing mood map, in days. At most `MAX_WINDOW_DAYS`.
    pub mood_map_days: u32,
    /// chrono format used when printing dates.
    pub date_format: String,
    /// Query string (e.g. `dateRange=month&hasPhoto=yes`) used when no filter
    /// is given on the command line.
    pub default_filters: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    entries_file: Option<PathBuf>,
    mood_map_days: Option<u32>,
    date_format: Option<String>,
    default_filters: Option<String>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let entries_file = file_config
            .entries_file
            .unwrap_or_else(Self::default_entries_file);
        let mood_map_days = file_config
            .mood_map_days
            .filter(|days| *days > 0)
            .map(|days| days.min(MAX_WINDOW_DAYS))
            .unwrap_or(DEFAULT_MOOD_MAP_DAYS);
        let date_format = file_config
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        let default_filters = file_config
            .default_filters
            .filter(|filters| !filters.trim().is_empty());

        Self {
            entries_file,
            mood_map_days,
            date_format,
            default_filters,
        }
    }

    /// Default entry cache: `{data_dir}/recapz/entries.json`
    /// - macOS:   `~/Library/Application Support/recapz/entries.json`
    /// - Linux:   `$XDG_DATA_HOME/recapz/entries.json` or `~/.local/share/recapz/entries.json`
    /// - Windows: `%APPDATA%\recapz\entries.json`
    fn default_entries_file() -> PathBuf {
        let mut p = match BaseDirs::new() {
            Some(base) => base.data_dir().join("recapz"),
            None => PathBuf::from("./recapz"),
        };
        p.push("entries.json");
        p
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("recapz")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("recapz").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
