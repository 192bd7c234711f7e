//! Provides [DecimalExtensions], which adds additional methods to [Decimal], and helpers for
//! reading numerals.

use core::str::FromStr;

use num_traits::{One, Zero};
use rust_decimal::Decimal;

/// This trait, and its implementation on `Decimal`, exist to add extra methods to `Decimal`.
/// Currently, these are:
///   - `from_numeral`, which reads the source text of a `Number` node without going through a
///     lossy float conversion.
///   - `is_whole`, which checks if a decimal has no fractional part.
pub trait DecimalExtensions: Sized {
    fn from_numeral(numeral: &str) -> Option<Self>;
    fn is_whole(&self) -> bool;
}

impl DecimalExtensions for Decimal {
    /// Parses a numeral such as `12`, `2.50` or `1e-3`. Returns `None` if the numeral can't be
    /// represented exactly, either because it is out of range or because it has more
    /// fractional digits than a `Decimal` keeps.
    fn from_numeral(numeral: &str) -> Option<Decimal> {
        let numeral = numeral.trim();

        // `from_str` rejects exponents, so fall back to the scientific parser for those
        if numeral.contains(|c: char| c == 'e' || c == 'E') {
            return Decimal::from_scientific(numeral).ok();
        }

        let decimal = Decimal::from_str(numeral).ok()?;
        let (_, fraction) = split_numeral(numeral)?;
        let significant = fraction.trim_end_matches('0').len() as u32;
        if decimal.normalize().scale() == significant {
            Some(decimal)
        } else {
            None
        }
    }

    /// Returns true if this decimal is a whole number, i.e. it is zero modulo one.
    fn is_whole(&self) -> bool {
        Zero::is_zero(&(*self % Decimal::one()))
    }
}

/// Decides whether a numeral has no fractional part by reading its digits, so numerals too large
/// or too long for a `Decimal` are still classified. Returns `None` if this isn't a numeral.
pub fn numeral_is_whole(numeral: &str) -> Option<bool> {
    let numeral = numeral.trim();

    if numeral.contains(|c: char| c == 'e' || c == 'E') {
        return Decimal::from_numeral(numeral).map(|d| d.is_whole());
    }

    let (_, fraction) = split_numeral(numeral)?;
    Some(fraction.chars().all(|c| c == '0'))
}

/// Splits plain decimal digits like `12.50` into their integer and fractional digits.
fn split_numeral(numeral: &str) -> Option<(&str, &str)> {
    let (integer, fraction) = numeral.split_once('.').unwrap_or((numeral, ""));
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if (integer.is_empty() && fraction.is_empty()) || !digits(integer) || !digits(fraction) {
        None
    } else {
        Some((integer, fraction))
    }
}
