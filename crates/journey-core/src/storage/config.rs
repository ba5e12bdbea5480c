//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Day/night theme switching hours
//! - Challenge progress-ring target
//! - Placeholder text for relapses logged without a note
//! - Contact address for feature requests
//!
//! Configuration is stored at `~/.config/nofap-journey/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Theme switching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Hour (0-23) at which the dark theme begins.
    #[serde(default = "default_night_starts_hour")]
    pub night_starts_hour: u32,
    /// Hour (0-23) at which the light theme resumes.
    #[serde(default = "default_night_ends_hour")]
    pub night_ends_hour: u32,
}

/// Challenge display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Days needed to fill the progress ring.
    #[serde(default = "default_ring_target_days")]
    pub ring_target_days: u32,
}

/// Relapse logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelapseConfig {
    #[serde(default = "default_relapse_reason")]
    pub default_reason: String,
}

/// Feature-request mail configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_email")]
    pub email: String,
    #[serde(default = "default_contact_subject")]
    pub subject: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/nofap-journey/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub challenge: ChallengeConfig,
    #[serde(default)]
    pub relapse: RelapseConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

// Default functions
fn default_night_starts_hour() -> u32 {
    18
}
fn default_night_ends_hour() -> u32 {
    6
}
fn default_ring_target_days() -> u32 {
    90
}
fn default_relapse_reason() -> String {
    "No reason provided".into()
}
fn default_contact_email() -> String {
    "usmanrehmaniofficial@gmail.com".into()
}
fn default_contact_subject() -> String {
    "NoFap Journey - Feature Request".into()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            night_starts_hour: default_night_starts_hour(),
            night_ends_hour: default_night_ends_hour(),
        }
    }
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            ring_target_days: default_ring_target_days(),
        }
    }
}

impl Default for RelapseConfig {
    fn default() -> Self {
        Self {
            default_reason: default_relapse_reason(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
            subject: default_contact_subject(),
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
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
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

    /// Set a config value by key in memory, validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    /// as the existing value's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, hour) in [
            ("theme.night_starts_hour", self.theme.night_starts_hour),
            ("theme.night_ends_hour", self.theme.night_ends_hour),
        ] {
            if hour > 23 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("hour must be 0-23, got {hour}"),
                });
            }
        }
        if self.challenge.ring_target_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "challenge.ring_target_days".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
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
        assert_eq!(parsed.theme.night_starts_hour, 18);
        assert_eq!(parsed.challenge.ring_target_days, 90);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[theme]\nnight_starts_hour = 20\n").unwrap();
        assert_eq!(parsed.theme.night_starts_hour, 20);
        assert_eq!(parsed.theme.night_ends_hour, 6);
        assert_eq!(parsed.relapse.default_reason, "No reason provided");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("theme.night_ends_hour").as_deref(), Some("6"));
        assert_eq!(
            cfg.get("relapse.default_reason").as_deref(),
            Some("No reason provided")
        );
        assert!(cfg.get("theme.missing_key").is_none());
    }

    #[test]
    fn apply_updates_nested_number() {
        let mut cfg = Config::default();
        cfg.apply("challenge.ring_target_days", "30").unwrap();
        assert_eq!(cfg.challenge.ring_target_days, 30);
    }

    #[test]
    fn apply_updates_nested_string() {
        let mut cfg = Config::default();
        cfg.apply("contact.subject", "Hello").unwrap();
        assert_eq!(cfg.contact.subject, "Hello");
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.apply("theme.nonexistent_key", "1").unwrap_err();
        assert!(err.to_string().contains("unknown config key"));
    }

    #[test]
    fn apply_rejects_invalid_type_and_range() {
        let mut cfg = Config::default();
        assert!(cfg.apply("theme.night_starts_hour", "evening").is_err());
        assert!(cfg.apply("theme.night_starts_hour", "24").is_err());
        assert!(cfg.apply("challenge.ring_target_days", "0").is_err());
        assert_eq!(cfg.theme.night_starts_hour, 18);
    }
}
