//! Currency prefix symbols.
//!
//! A symbol is printed verbatim before a formatted amount. Valid symbols:
//! - Must be non-empty
//! - Must not contain ASCII digits or `.` (they would read as part of the amount)
//! - Must not contain ASCII whitespace

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Symbol used when none is configured.
pub const DEFAULT_SYMBOL: &str = "$";

/// A validated currency prefix such as `$`, `€` or `USD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Validate `symbol` and wrap it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_types::Currency;
    ///
    /// assert_eq!(Currency::new("€").unwrap().symbol(), "€");
    /// assert!(Currency::new("").is_err());
    /// assert!(Currency::new("1$").is_err());
    /// ```
    pub fn new(symbol: impl Into<String>) -> Result<Self, TypeError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(TypeError::EmptySymbol);
        }

        let numeric = symbol.chars().find(|c| c.is_ascii_digit() || *c == '.');
        if let Some(ch) = numeric {
            return Err(TypeError::InvalidSymbol {
                reason: format!("contains numeric character {ch:?}"),
                symbol,
            });
        }

        if symbol.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(TypeError::InvalidSymbol {
                symbol,
                reason: "contains whitespace".into(),
            });
        }

        Ok(Self(symbol))
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dollar() {
        assert_eq!(Currency::default().symbol(), "$");
    }

    #[test]
    fn accepts_multi_char_symbols() {
        assert_eq!(Currency::new("USD").unwrap().to_string(), "USD");
        assert_eq!(Currency::new("R$").unwrap().symbol(), "R$");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Currency::new(""), Err(TypeError::EmptySymbol));
    }

    #[test]
    fn rejects_digits_and_dot() {
        assert!(matches!(
            Currency::new("$1"),
            Err(TypeError::InvalidSymbol { .. })
        ));
        assert!(matches!(
            Currency::new("."),
            Err(TypeError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn rejects_whitespace() {
        let err = Currency::new("US D").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidSymbol {
                symbol: "US D".into(),
                reason: "contains whitespace".into(),
            }
        );
    }

    #[test]
    fn from_str_validates() {
        assert!("£".parse::<Currency>().is_ok());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn serde_uses_plain_string() {
        let json = serde_json::to_string(&Currency::new("€").unwrap()).unwrap();
        assert_eq!(json, "\"€\"");
        let parsed: Currency = serde_json::from_str("\"£\"").unwrap();
        assert_eq!(parsed.symbol(), "£");
        assert!(serde_json::from_str::<Currency>("\"9\"").is_err());
    }
}
