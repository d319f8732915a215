use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_CITY: &str = "Delhi";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_url = "http://localhost:5000"
/// default_city = "Delhi"
/// sibling_cities = ["Mumbai", "Kolkata"]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the dashboard backend.
    pub api_url: String,

    /// City shown when none is given on the command line.
    pub default_city: String,

    /// Cities listed under "other cities".
    pub sibling_cities: Vec<String>,

    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            sibling_cities: vec!["Mumbai".to_string(), "Kolkata".to_string()],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("Invalid API URL '{url}'. It must start with http:// or https://.");
        }

        self.api_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Add a sibling city unless it is already listed (case-insensitive).
    /// Returns whether the list changed.
    pub fn add_sibling_city(&mut self, city: &str) -> bool {
        let city = city.trim();
        if city.is_empty() || self.has_sibling_city(city) {
            return false;
        }

        self.sibling_cities.push(city.to_string());
        true
    }

    pub fn remove_sibling_city(&mut self, city: &str) -> bool {
        let before = self.sibling_cities.len();
        self.sibling_cities.retain(|c| !c.eq_ignore_ascii_case(city.trim()));
        self.sibling_cities.len() != before
    }

    pub fn has_sibling_city(&self, city: &str) -> bool {
        self.sibling_cities.iter().any(|c| c.eq_ignore_ascii_case(city.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.default_city, "Delhi");
        assert_eq!(cfg.sibling_cities, vec!["Mumbai", "Kolkata"]);
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg = Config::from_toml("default_city = \"Paris\"\n").expect("valid toml");
        assert_eq!(cfg.default_city, "Paris");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.sibling_cities.len(), 2);
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.add_sibling_city("Seoul");

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn set_api_url_validates_scheme() {
        let mut cfg = Config::default();

        cfg.set_api_url("https://weather.example.com/").expect("valid url");
        assert_eq!(cfg.api_url, "https://weather.example.com");

        let err = cfg.set_api_url("weather.example.com").unwrap_err();
        assert!(err.to_string().contains("Invalid API URL"));
        assert_eq!(cfg.api_url, "https://weather.example.com");
    }

    #[test]
    fn sibling_cities_are_deduplicated() {
        let mut cfg = Config::default();

        assert!(!cfg.add_sibling_city("mumbai"));
        assert!(!cfg.add_sibling_city("  "));
        assert!(cfg.add_sibling_city("Dubai"));
        assert_eq!(cfg.sibling_cities, vec!["Mumbai", "Kolkata", "Dubai"]);

        assert!(cfg.remove_sibling_city("KOLKATA"));
        assert!(!cfg.remove_sibling_city("Kolkata"));
        assert_eq!(cfg.sibling_cities, vec!["Mumbai", "Dubai"]);
    }
}
