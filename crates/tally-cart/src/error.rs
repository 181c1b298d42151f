//! Error types for the cart crate.

use tally_types::TypeError;

/// Errors that can occur during cart operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    /// The text held no digits to read a price from.
    #[error("no numeric price in {input:?}")]
    InvalidPrice { input: String },

    /// A type-level validation failed (e.g. a bad currency symbol).
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Convenience alias for cart results.
pub type CartResult<T> = Result<T, CartError>;
