//! Cart arithmetic for tally.
//!
//! Sums priced lines, renders amounts with a currency prefix, and recovers
//! numbers from decorated price strings such as `"$1,299.99"`.
//!
//! # Key Types
//!
//! - [`Cart`] — Ordered list of [`Item`](tally_types::Item)s with a running total
//! - [`calculate_total`] — Sum of `price * quantity` over any item iterator
//! - [`format_currency`] / [`format_amount`] — Two-decimal rendering with a prefix
//! - [`parse_price`] — Numeric extraction from free-form price text

pub mod cart;
pub mod error;
pub mod format;
pub mod price;

pub use cart::{calculate_total, Cart};
pub use error::{CartError, CartResult};
pub use format::{format_amount, format_currency};
pub use price::parse_price;
