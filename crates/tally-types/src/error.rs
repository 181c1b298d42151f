use thiserror::Error;

/// Errors produced by type construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("currency symbol must not be empty")]
    EmptySymbol,

    #[error("invalid currency symbol {symbol:?}: {reason}")]
    InvalidSymbol { symbol: String, reason: String },
}
