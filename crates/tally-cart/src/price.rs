//! Price extraction from free-form text.
//!
//! Everything except ASCII digits and `.` is discarded, then the longest
//! leading decimal literal is read. A second `.` ends the literal, so
//! `"1.2.3"` reads as `1.2`. Signs are discarded with the other symbols.

use tracing::debug;

use crate::error::{CartError, CartResult};

/// Parse a decorated price string such as `"$12.50"` or `"USD 1,299.99"`.
///
/// ```
/// use tally_cart::parse_price;
///
/// assert_eq!(parse_price("$12.50").unwrap(), 12.5);
/// assert_eq!(parse_price("USD 1,299.99").unwrap(), 1299.99);
/// assert!(parse_price("free").is_err());
/// ```
pub fn parse_price(text: &str) -> CartResult<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let literal = leading_literal(&cleaned);
    if !literal.bytes().any(|b| b.is_ascii_digit()) {
        debug!(input = text, "no digits in price text");
        return Err(CartError::InvalidPrice {
            input: text.to_string(),
        });
    }

    // "12." and ".5" both carry digits; only the trailing dot needs dropping.
    literal
        .trim_end_matches('.')
        .parse::<f64>()
        .map_err(|_| CartError::InvalidPrice {
            input: text.to_string(),
        })
}

/// Prefix of `s` up to (not including) the second `.`.
fn leading_literal(s: &str) -> &str {
    let mut dots = s.match_indices('.').map(|(i, _)| i);
    match (dots.next(), dots.next()) {
        (Some(_), Some(second)) => &s[..second],
        _ => s,
    }
}
