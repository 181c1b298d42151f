use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tally_types::Currency;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TallyConfig {
    /// Prefix used when formatting amounts.
    pub currency: Currency,
}

impl TallyConfig {
    /// Load from an explicit path, or from `./tally.toml` if it exists.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), currency = %config.currency, "config loaded");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        assert_eq!(TallyConfig::default().currency.symbol(), "$");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(TallyConfig::from_toml("").unwrap(), TallyConfig::default());
    }

    #[test]
    fn currency_from_toml() {
        let config = TallyConfig::from_toml("currency = \"€\"").unwrap();
        assert_eq!(config.currency.symbol(), "€");
    }

    #[test]
    fn invalid_currency_rejected() {
        assert!(TallyConfig::from_toml("currency = \"\"").is_err());
        assert!(TallyConfig::from_toml("currency = \"1\"").is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(TallyConfig::from_toml("symbol = \"$\"").is_err());
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency = \"£\"").unwrap();
        let config = TallyConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.currency.symbol(), "£");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TallyConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
