use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the records manager.
///
/// Records themselves are never persisted; this only controls how the
/// in-memory registry is set up and which rules it enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether the registry starts out with the bundled sample dataset.
    pub sample_data: bool,

    /// Whether records may share an identifier.
    ///
    /// When `false` (default): adding a student, teacher or course whose
    /// student ID, teacher ID or course code is already registered fails.
    ///
    /// When `true`: duplicates are silently accepted. Records are still
    /// distinguished by their position in the registry.
    pub allow_duplicate_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_data: default_sample_data(),
            allow_duplicate_ids: false,
        }
    }
}

/// Errors that can occur when reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to {action} config file: {source}")]
    Io {
        /// What was being attempted.
        action: &'static str,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file contents were not valid configuration TOML.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            action: "read",
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration from `path`, falling back to the defaults if
    /// there is no file there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            action: "write",
            source,
        })
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

const fn default_sample_data() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_sample_data")]
        sample_data: bool,

        #[serde(default)]
        allow_duplicate_ids: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                sample_data,
                allow_duplicate_ids,
            } => Self {
                sample_data,
                allow_duplicate_ids,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            sample_data: config.sample_data,
            allow_duplicate_ids: config.allow_duplicate_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nsample_data = false\nallow_duplicate_ids = true\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert!(!config.sample_data);
        assert!(config.allow_duplicate_ids);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nsample_data = \"yes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&tmp.path().join("records.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_is_not_replaced_by_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nallow_duplicate_ids = \"yes\"\n")
            .unwrap();

        let error = Config::load_or_default(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("records.toml");
        let config = Config {
            sample_data: false,
            allow_duplicate_ids: true,
        };

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
