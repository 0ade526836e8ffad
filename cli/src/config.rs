//! CLI configuration, loadable from a TOML file.
//!
//! File values are defaults; command-line flags and `SEEDKIT_*`
//! environment variables override them.

use serde::{Deserialize, Serialize};
use seedkit_types::EntropyBits;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for the `seedkit` binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Entropy strength for `mnemonic generate`, in bits.
    #[serde(default)]
    pub strength: EntropyBits,

    /// Newline-separated 2048-word list. The BIP39 English list when unset.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,

    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON.
    #[serde(default)]
    pub log_json: bool,

    /// Print command results as JSON.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strength: EntropyBits::default(),
            wordlist: None,
            log_level: default_log_level(),
            log_json: false,
            json: false,
        }
    }
}

impl CliConfig {
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = CliConfig::from_toml("", Path::new("seedkit.toml")).unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.strength, EntropyBits::Bits256);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn parses_all_fields() {
        let toml = r#"
            strength = 128
            wordlist = "/usr/share/seedkit/english.txt"
            log_level = "debug"
            log_json = true
            json = true
        "#;
        let cfg = CliConfig::from_toml(toml, Path::new("seedkit.toml")).unwrap();
        assert_eq!(cfg.strength, EntropyBits::Bits128);
        assert_eq!(
            cfg.wordlist.as_deref(),
            Some(Path::new("/usr/share/seedkit/english.txt"))
        );
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.log_json);
        assert!(cfg.json);
    }

    #[test]
    fn rejects_unsupported_strength() {
        let err = CliConfig::from_toml("strength = 100", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_reported() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/seedkit.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = CliConfig {
            strength: EntropyBits::Bits224,
            json: true,
            ..Default::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(CliConfig::from_toml(&text, Path::new("x")).unwrap(), cfg);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seedkit.toml");
        std::fs::write(&path, "strength = 192\nlog_level = \"info\"\n").unwrap();
        let cfg = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.strength, EntropyBits::Bits192);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.json);
    }
}
