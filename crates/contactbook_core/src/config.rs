//! Application configuration and seed data.
//!
//! # Responsibility
//! - Describe startup settings (log level/dir) and the seed contact set.
//! - Parse configuration from JSON, falling back to built-in defaults.
//!
//! # Invariants
//! - Every seed contact has a non-blank name after trim.
//! - The built-in seed is deterministic so the initial view is reproducible.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const BUILTIN_CONTACTS: &[(&str, &str, &str)] = &[
    ("Ana Perez", "0991234567", "ana.perez@email.com"),
    ("Luis Gomez", "0987654321", "luis.gomez@email.com"),
    ("Marta Ruiz", "0971122334", "marta.ruiz@email.com"),
    ("Carlos Vega", "0969988776", "carlos.vega@email.com"),
    ("Elena Diaz", "0954433221", "elena.diaz@email.com"),
    ("Jorge Lopez", "0945566778", "jorge.lopez@email.com"),
    ("Sofia Cruz", "0932211445", "sofia.cruz@email.com"),
];

const BUILTIN_COLLABORATIONS: &[(&str, &str)] = &[
    ("Ana Perez", "Luis Gomez"),
    ("Ana Perez", "Marta Ruiz"),
    ("Luis Gomez", "Carlos Vega"),
];

/// Errors from configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// JSON payload is malformed or has wrong field types.
    Parse(serde_json::Error),
    /// Seed contact at `index` has a blank name.
    InvalidSeedContact { index: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidSeedContact { index } => {
                write!(f, "seed contact #{index} must have a non-blank name")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidSeedContact { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// One seed contact triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedContact {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl SeedContact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Contacts and collaborations replayed at startup.
///
/// Collaborations name contacts; pairs that do not resolve are skipped by
/// the seeding code rather than rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub contacts: Vec<SeedContact>,
    #[serde(default)]
    pub collaborations: Vec<(String, String)>,
}

impl SeedData {
    /// Empty seed: no contacts, no edges.
    pub fn empty() -> Self {
        Self {
            contacts: Vec::new(),
            collaborations: Vec::new(),
        }
    }

    /// The seven demo contacts and three fixed collaborations.
    pub fn builtin() -> Self {
        Self {
            contacts: BUILTIN_CONTACTS
                .iter()
                .map(|(name, phone, email)| SeedContact::new(*name, *phone, *email))
                .collect(),
            collaborations: BUILTIN_COLLABORATIONS
                .iter()
                .map(|(first, second)| (first.to_string(), second.to_string()))
                .collect(),
        }
    }

    /// Rejects seed contacts with blank names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .contacts
            .iter()
            .position(|contact| contact.name.trim().is_empty())
        {
            Some(index) => Err(ConfigError::InvalidSeedContact { index }),
            None => Ok(()),
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Startup configuration for hosts (CLI, FFI).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// One of `trace|debug|info|warn|error`; `None` uses the build default.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default)]
    pub seed: SeedData,
}

impl AppConfig {
    /// Parses and validates configuration from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.seed.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Effective log level, falling back to [`crate::default_log_level`].
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(crate::logging::default_log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, SeedData};
    use std::io::Write;

    #[test]
    fn empty_object_uses_builtin_seed() {
        let config = AppConfig::from_json_str("{}").expect("empty object should parse");
        assert_eq!(config.seed, SeedData::builtin());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn builtin_seed_has_seven_contacts_and_three_edges() {
        let seed = SeedData::builtin();
        assert_eq!(seed.contacts.len(), 7);
        assert_eq!(seed.collaborations.len(), 3);
        assert_eq!(seed.contacts[0].name, "Ana Perez");
    }

    #[test]
    fn blank_seed_name_is_rejected() {
        let err = AppConfig::from_json_str(
            r#"{"seed": {"contacts": [{"name": "Ana"}, {"name": "  "}]}}"#,
        )
        .expect_err("blank seed name must fail");
        assert!(matches!(err, ConfigError::InvalidSeedContact { index: 1 }));
    }

    #[test]
    fn load_reads_custom_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{
                "log_level": "warn",
                "seed": {{
                    "contacts": [{{"name": "Zoe Ramos", "phone": "0900000000"}}],
                    "collaborations": []
                }}
            }}"#
        )
        .expect("config should be written");

        let config = AppConfig::load(file.path()).expect("config file should load");
        assert_eq!(config.effective_log_level(), "warn");
        assert_eq!(config.seed.contacts.len(), 1);
        assert_eq!(config.seed.contacts[0].email, "");
    }

    #[test]
    fn missing_log_level_falls_back_to_default() {
        let config = AppConfig::from_json_str("{}").expect("empty object should parse");
        assert_eq!(
            config.effective_log_level(),
            crate::logging::default_log_level()
        );
    }

    #[test]
    fn load_missing_file_maps_to_io_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let err = AppConfig::load(dir.path().join("absent.json"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_json_maps_to_parse_error() {
        let err = AppConfig::from_json_str("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
