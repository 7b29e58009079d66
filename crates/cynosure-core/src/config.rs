//! Configuration types for cynosure.
//!
//! [`Config::load`] reads `~/.config/cynosure/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "data.json"

[ui]
filter_pane_width_pct = 28
show_brochure         = false
theme                 = "default"

[schedule]
days    = ["2025-09-26", "2025-09-27"]
dates   = ["2025-09-26", "2025-09-27", "Both"]
domains = ["Literary", "Fine Arts", "Commerce", "Performing Arts", "Cynoshow", "Sports"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/cynosure/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// `[data]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Schedule document, relative to the working directory unless absolute.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("data.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_filter_pane_width_pct")]
    pub filter_pane_width_pct: u16,
    /// Expand every brochure extract instead of showing them on demand.
    #[serde(default)]
    pub show_brochure: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_filter_pane_width_pct() -> u16 { 28 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            filter_pane_width_pct: default_filter_pane_width_pct(),
            show_brochure: false,
            theme: default_theme(),
        }
    }
}

/// `[schedule]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// The festival days, in order; one timeline is drawn per day.
    #[serde(default = "default_days")]
    pub days: Vec<String>,
    /// Date tokens offered by the date filter.
    #[serde(default = "default_dates")]
    pub dates: Vec<String>,
    /// Domains offered by the domain filter.
    #[serde(default = "default_domains")]
    pub domains: Vec<String>,
}

fn default_days() -> Vec<String> {
    vec!["2025-09-26".to_string(), "2025-09-27".to_string()]
}
fn default_dates() -> Vec<String> {
    let mut dates = default_days();
    dates.push(crate::BOTH_DAYS.to_string());
    dates
}
fn default_domains() -> Vec<String> {
    ["Literary", "Fine Arts", "Commerce", "Performing Arts", "Cynoshow", "Sports"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            dates: default_dates(),
            domains: default_domains(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cynosure/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Parse a TOML document layered over the built-in defaults.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("cynosure")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
