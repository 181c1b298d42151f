//! Foundation types for tally.
//!
//! Every other tally crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Item`] — A priced line with a quantity
//! - [`Currency`] — Validated prefix symbol used when formatting amounts
//! - [`TypeError`] — Validation failures for the types above

pub mod currency;
pub mod error;
pub mod item;

pub use currency::Currency;
pub use error::TypeError;
pub use item::Item;
