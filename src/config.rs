//! User configuration — output path, HTTP settings and the city list.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/hotel-scraper/config.toml` (default
//! `~/.config/hotel-scraper/config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use crate::core::city::City;

pub const DEFAULT_OUTPUT: &str = "assets/marrakech_hotels.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// ───────────────────────────────────────── config ────────────

/// Effective run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the CSV is written.
    pub output: PathBuf,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Cities to scrape, in order.
    pub cities: Vec<City>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cities: City::default_set(),
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => return Self::parse_config(&contents),
                Err(e) => tracing::warn!("ignoring unreadable config {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    /// Persist current config to disk and return where it went.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();
        let mut cities = Vec::new();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"');

            match key.trim() {
                "output" if !value.is_empty() => config.output = PathBuf::from(value),
                "timeout_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.timeout_secs = v.clamp(1, 300);
                    }
                }
                "user_agent" if !value.is_empty() => config.user_agent = value.to_string(),
                "city" => match City::parse(value) {
                    Some(city) => cities.push(city),
                    None => tracing::warn!("ignoring malformed city entry `{value}`"),
                },
                _ => {}
            }
        }

        if !cities.is_empty() {
            config.cities = cities;
        }
        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# hotel-scraper configuration".to_string(),
            String::new(),
            format!("output = {}", self.output.display()),
            format!("timeout_secs = {}", self.timeout_secs),
            format!("user_agent = {}", self.user_agent),
            String::new(),
            "# Cities, scraped in order".to_string(),
            "# Format: city = Name:dest_id".to_string(),
        ];
        for city in &self.cities {
            lines.push(format!("city = {city}"));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/hotel-scraper/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("hotel-scraper").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::parse_config(""), AppConfig::default());
    }

    #[test]
    fn reads_known_keys_and_skips_noise() {
        let config = AppConfig::parse_config(
            "# comment\n\
             [scraper]\n\
             output = \"out/hotels.csv\"\n\
             timeout_secs = 900\n\
             user_agent = test-agent/1.0\n\
             colour = blue\n\
             not a pair\n\
             city = Paris:-1456928\n\
             city = broken\n\
             city = London : -2601889\n",
        );
        assert_eq!(config.output, PathBuf::from("out/hotels.csv"));
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(
            config.cities,
            vec![City::new("Paris", "-1456928"), City::new("London", "-2601889")]
        );
    }

    #[test]
    fn serialised_form_parses_back() {
        let config = AppConfig {
            output: PathBuf::from("data/out.csv"),
            timeout_secs: 5,
            user_agent: "agent".into(),
            cities: vec![City::new("Fes", "-24307")],
        };
        assert_eq!(AppConfig::parse_config(&config.serialise()), config);
        assert_eq!(
            AppConfig::parse_config(&AppConfig::default().serialise()),
            AppConfig::default()
        );
    }
}
