//! Application configuration.
//!
//! Values are layered: built-in defaults, then the JSON config file, then the
//! environment, then command-line flags.

use crate::consts::cli_consts::{DEFAULT_MODELS, refresh::DEFAULT_INTERVAL_SECS};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Environment variable overriding the service base URL.
pub const URL_ENV_VAR: &str = "PREDICTION_DASHBOARD_URL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Service base URL; the local development server when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Seconds between automatic refreshes.
    pub refresh_interval_secs: u64,

    /// Optional per-request timeout; requests never time out when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Models offered by the prediction form.
    pub models: Vec<String>,

    /// Model preselected in the prediction form.
    pub default_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            refresh_interval_secs: DEFAULT_INTERVAL_SECS,
            request_timeout_secs: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            default_model: DEFAULT_MODELS[0].to_string(),
        }
    }
}

/// Overrides coming from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Apply an environment URL and command-line overrides, in that order.
    pub fn with_overrides(mut self, env_url: Option<String>, overrides: &ConfigOverrides) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(url) = &overrides.base_url {
            self.base_url = Some(url.clone());
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.refresh_interval_secs = secs;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
        self
    }

    /// The service to talk to.
    pub fn environment(&self) -> Result<Environment, String> {
        match &self.base_url {
            Some(url) => url
                .parse::<Environment>()
                .map_err(|_| format!("Invalid service URL: {}", url)),
            None => Ok(Environment::default()),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Models for the prediction form, never empty and always including
    /// `default_model`.
    pub fn form_models(&self) -> Vec<String> {
        let mut models: Vec<String> = if self.models.is_empty() {
            DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
        } else {
            self.models.clone()
        };
        if !self.default_model.trim().is_empty() && !models.contains(&self.default_model) {
            models.push(self.default_model.clone());
        }
        models
    }
}

/// Location of the config file: `~/.prediction-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(".prediction-dashboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            base_url: Some("http://10.0.0.5:5000".to_string()),
            refresh_interval_secs: 10,
            request_timeout_secs: Some(5),
            models: vec!["svm".to_string()],
            default_model: "svm".to_string(),
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Missing keys fall back to their defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"refresh_interval_secs": 5}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.refresh_interval_secs, 5);
        assert_eq!(config.base_url, None);
        assert_eq!(config.models, Config::default().models);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_flags_override_environment_override_file() {
        let overrides = ConfigOverrides {
            base_url: None,
            refresh_interval_secs: Some(15),
            request_timeout_secs: None,
        };
        let config = sample_config()
            .with_overrides(Some("http://env-host:5000".to_string()), &overrides);
        assert_eq!(config.base_url.as_deref(), Some("http://env-host:5000"));
        assert_eq!(config.refresh_interval_secs, 15);
        assert_eq!(config.request_timeout_secs, Some(5));

        let overrides = ConfigOverrides {
            base_url: Some("http://flag-host:5000".to_string()),
            ..Default::default()
        };
        let config = config.with_overrides(Some("http://env-host:5000".to_string()), &overrides);
        assert_eq!(config.base_url.as_deref(), Some("http://flag-host:5000"));
    }

    #[test]
    fn test_environment_resolution() {
        assert_eq!(Config::default().environment().unwrap(), Environment::Local);
        let config = Config {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.environment().is_err());
    }

    #[test]
    fn test_empty_model_list_falls_back() {
        let config = Config {
            models: vec![],
            ..Default::default()
        };
        assert_eq!(config.form_models().len(), 3);
    }

    #[test]
    fn test_default_model_is_always_selectable() {
        let config = Config {
            models: vec!["svm".to_string()],
            default_model: "knn".to_string(),
            ..Default::default()
        };
        assert_eq!(config.form_models(), vec!["svm", "knn"]);

        let form = crate::ui::dashboard::input::FormState::new(
            config.form_models(),
            &config.default_model,
        );
        assert_eq!(form.form.model, "knn");
    }
}
