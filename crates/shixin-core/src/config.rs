//! TOML-based application configuration.
//!
//! Stores the advice consultation settings: which model to consult,
//! where its API lives, and how long to wait before the bundled
//! counsel wins. Configuration is stored at
//! `~/.config/shixin/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::advice;
use crate::advice::gemini;
use crate::error::ConfigError;

/// Returns `~/.config/shixin[-dev]/` based on SHIXIN_ENV.
///
/// Set SHIXIN_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SHIXIN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("shixin-dev")
    } else {
        base_dir.join("shixin")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Advice consultation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds the remote consultation may run before the bundled
    /// counsel wins.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/shixin/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub advice: AdviceConfig,
}

// Default functions
fn default_model() -> String {
    gemini::DEFAULT_MODEL.into()
}
fn default_endpoint() -> String {
    gemini::DEFAULT_ENDPOINT.into()
}
fn default_timeout_secs() -> u64 {
    advice::DEFAULT_TIMEOUT_SECS
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advice: AdviceConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(String::new()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let invalid = |message: String| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message,
                };
                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.advice.model, gemini::DEFAULT_MODEL);
        assert_eq!(parsed.advice.timeout_secs, 15);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.advice.endpoint, gemini::DEFAULT_ENDPOINT);

        let cfg: Config = toml::from_str("[advice]\nmodel = \"gemini-1.5-pro\"\n").unwrap();
        assert_eq!(cfg.advice.model, "gemini-1.5-pro");
        assert_eq!(cfg.advice.timeout_secs, 15, "unset keys keep defaults");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("advice.model").as_deref(), Some(gemini::DEFAULT_MODEL));
        assert_eq!(cfg.get("advice.timeout_secs").as_deref(), Some("15"));
        assert!(cfg.get("advice.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "advice.timeout_secs", "30").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "advice.timeout_secs").unwrap(),
            &serde_json::Value::Number(30.into())
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "advice.model", "gemini-2.0-flash").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "advice.model").unwrap(),
            &serde_json::Value::String("gemini-2.0-flash".to_string())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "advice.nonexistent_key", "value");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "advice.timeout_secs", "soon");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
