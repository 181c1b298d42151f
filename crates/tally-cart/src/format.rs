//! Currency rendering.
//!
//! Amounts are printed as `<symbol><amount>` with exactly two decimals. The
//! sign, if any, follows the symbol (`$-3.00`). Exact ties at the third
//! decimal (`0.125`, `0.625`) round away from zero. Amounts of `1e21` or more
//! switch to exponent notation (`$1e+21`). Non-finite values are not rejected
//! and print as `NaN`, `Infinity` or `-Infinity`.

use tally_types::Currency;

/// Magnitude from which amounts print in exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Render `amount` with the given currency prefix and two decimals.
///
/// ```
/// use tally_cart::format_currency;
/// use tally_types::Currency;
///
/// let eur = Currency::new("€").unwrap();
/// assert_eq!(format_currency(12.5, &eur), "€12.50");
/// ```
pub fn format_currency(amount: f64, currency: &Currency) -> String {
    format!("{currency}{}", fixed_two(amount))
}

/// [`format_currency`] with the default `$` prefix.
pub fn format_amount(amount: f64) -> String {
    format_currency(amount, &Currency::default())
}

fn fixed_two(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".into();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if amount.abs() >= EXPONENT_THRESHOLD {
        // Shortest round-trip digits; the exponent is always positive here.
        return format!("{amount:e}").replacen('e', "e+", 1);
    }
    // -0.0 would otherwise render as "-0.00".
    let amount = if amount == 0.0 { 0.0 } else { amount };
    if is_cent_tie(amount) {
        return round_tie_away(amount);
    }
    format!("{amount:.2}")
}

/// Round an odd eighth away from zero. Whole part and fraction split exactly,
/// so no scaling error creeps in at large magnitudes.
fn round_tie_away(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let whole = magnitude.trunc();
    let cents = match ((magnitude - whole) * 8.0) as u8 {
        1 => 13,
        3 => 38,
        5 => 63,
        _ => 88,
    };
    format!("{sign}{whole:.0}.{cents}")
}

/// True when `amount` is an odd multiple of 1/8, the only binary values that
/// sit exactly halfway between two cents.
fn is_cent_tie(amount: f64) -> bool {
    let eighths = amount * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}
