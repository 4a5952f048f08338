use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

/// Everything the completion pipeline reads from the user's settings.
///
/// Missing keys in the file take their default, so a file holding only
/// `api_key` is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bearer token for the chat API, kept as written. May reference the
    /// environment, as in `api_key = "$OPENAI_API_KEY"`; see
    /// [`Settings::resolved_api_key`].
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Typed phrase that opens the inline prompt.
    pub trigger_phrase: String,
    pub is_enabled: bool,
    /// Base URL of the chat API; `/v1/chat/completions` is appended.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            trigger_phrase: "!!".to_string(),
            is_enabled: true,
            endpoint: "https://api.openai.com".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Settings {
    pub const MAX_TEMPERATURE: f32 = 2.0;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        settings.validate()?;

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the default file, or falls back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cannonball");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Checks value ranges. An empty API key is allowed here; the dispatcher
    /// reports it when a completion is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(invalid("model", "must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(invalid("max_tokens", "must be greater than zero"));
        }
        if !(0.0..=Self::MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(invalid(
                "temperature",
                format!("{} is outside 0 to {}", self.temperature, Self::MAX_TEMPERATURE),
            ));
        }
        if self.trigger_phrase.is_empty() {
            return Err(invalid("trigger_phrase", "must not be empty"));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(invalid(
                "endpoint",
                format!("{:?} is not an http(s) URL", self.endpoint),
            ));
        }
        Ok(())
    }

    /// The API key with `~` and environment variables expanded. A reference
    /// to an unset variable is returned as written.
    pub fn resolved_api_key(&self) -> String {
        match shellexpand::full(&self.api_key) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => self.api_key.clone(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Settings::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/cannonball/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_key, "");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.trigger_phrase, "!!");
        assert!(settings.is_enabled);
        assert_eq!(settings.resolved_api_key(), "");
        settings.validate().unwrap();
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let settings: Settings = toml::from_str("model = \"gpt-4o-mini\"\n").unwrap();
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.trigger_phrase, "!!");
    }

    #[rstest]
    #[case::empty_model(Settings { model: " ".into(), ..Settings::default() }, "model")]
    #[case::zero_tokens(Settings { max_tokens: 0, ..Settings::default() }, "max_tokens")]
    #[case::hot(Settings { temperature: 2.5, ..Settings::default() }, "temperature")]
    #[case::negative(Settings { temperature: -0.1, ..Settings::default() }, "temperature")]
    #[case::no_trigger(Settings { trigger_phrase: String::new(), ..Settings::default() }, "trigger_phrase")]
    #[case::bad_scheme(Settings { endpoint: "api.openai.com".into(), ..Settings::default() }, "endpoint")]
    fn test_validate_rejects(#[case] settings: Settings, #[case] expected: &str) {
        match settings.validate() {
            Err(ConfigError::InvalidSetting { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        for temperature in [0.0, 2.0] {
            Settings {
                temperature,
                ..Settings::default()
            }
            .validate()
            .unwrap();
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Settings::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let settings = Settings {
            api_key: "sk-test".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 256,
            temperature: 0.2,
            trigger_phrase: ";;".into(),
            is_enabled: false,
            ..Settings::default()
        };

        settings.save_to_path(&config_file).unwrap();
        let loaded = Settings::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_api_key_from_env_var() {
        unsafe {
            env::set_var("CANNONBALL_TEST_KEY", "sk-from-env");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "api_key = \"$CANNONBALL_TEST_KEY\"\n").unwrap();

        let loaded = Settings::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.api_key, "$CANNONBALL_TEST_KEY");
        assert_eq!(loaded.resolved_api_key(), "sk-from-env");

        // Saving a loaded record keeps the reference, not the secret.
        loaded.save_to_path(&config_file).unwrap();
        let saved = std::fs::read_to_string(&config_file).unwrap();
        assert!(saved.contains("$CANNONBALL_TEST_KEY"), "{saved}");
        assert!(!saved.contains("sk-from-env"), "{saved}");

        unsafe {
            env::remove_var("CANNONBALL_TEST_KEY");
        }
    }

    #[test]
    fn test_unknown_env_var_keeps_literal_key() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "api_key = \"$CANNONBALL_UNSET_VAR_XYZ\"\n").unwrap();

        let loaded = Settings::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.resolved_api_key(), "$CANNONBALL_UNSET_VAR_XYZ");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "max_tokens = \"lots\"\n").unwrap();

        let err = Settings::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_invalid_values_fail_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "temperature = 3.0\n").unwrap();

        let err = Settings::load_from_path(&config_file).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                field: "temperature",
                ..
            }
        ));
    }
}
