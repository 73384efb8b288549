use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{RedmineError, Result};

#[derive(Deserialize, Default)]
pub struct Config {
    /// Cosmetic server label shown by `init`; never sent on the wire.
    pub name: Option<String>,
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| RedmineError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| RedmineError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "redmine")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(RedmineError::NoConfigDir)
    }

    /// Get the server base URL with env var taking precedence over the
    /// config file. Blank values count as missing; both sources are
    /// trimmed.
    pub fn base_url(&self) -> Result<String> {
        if let Some(url) = std::env::var("REDMINE_URL").ok().as_deref().and_then(non_blank) {
            return Ok(url);
        }

        self.url
            .as_deref()
            .and_then(non_blank)
            .ok_or(RedmineError::MissingBaseUrl)
    }

    /// Get the API key with env var taking precedence over the config file.
    pub fn api_key(&self) -> Result<String> {
        if let Some(key) = std::env::var("REDMINE_API_KEY")
            .ok()
            .as_deref()
            .and_then(non_blank)
        {
            return Ok(key);
        }

        self.api_key
            .as_deref()
            .and_then(non_blank)
            .ok_or(RedmineError::MissingApiKey)
    }
}

/// Trimmed copy of a setting, or None when it is blank.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_url_counts_as_missing() {
        let config = Config {
            name: None,
            url: Some("   ".to_string()),
            api_key: Some("abc123".to_string()),
        };

        assert!(matches!(
            config.base_url(),
            Err(RedmineError::MissingBaseUrl)
        ));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config {
            name: None,
            url: Some("https://redmine.example.com".to_string()),
            api_key: None,
        };

        assert!(matches!(config.api_key(), Err(RedmineError::MissingApiKey)));
    }

    #[test]
    fn settings_are_trimmed_from_any_source() {
        // Both the env-var and config-file paths resolve through here.
        assert_eq!(
            non_blank("  https://redmine.example.com  "),
            Some("https://redmine.example.com".to_string())
        );
        assert_eq!(non_blank(" abc123\n"), Some("abc123".to_string()));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }

    #[test]
    fn configured_values_are_trimmed() {
        let config = Config {
            name: Some("Work".to_string()),
            url: Some("  https://redmine.example.com  ".to_string()),
            api_key: Some(" abc123 ".to_string()),
        };

        assert_eq!(config.base_url().unwrap(), "https://redmine.example.com");
        assert_eq!(config.api_key().unwrap(), "abc123");
    }
}
