mod source;


pub use source::{RandomSource, SeededRandom, ThreadRandom};

use crate::error::ArrangeError;
use serde_json::Value;

/// Draw a uniformly distributed integer in `[minimum, maximum]`
///
/// Scales a unit draw by the width of the range and truncates toward zero.
/// Truncation (not rounding) keeps every integer equally likely.
pub fn random_int<R: RandomSource + ?Sized>(
    rng: &mut R,
    minimum: i64,
    maximum: i64,
) -> Result<i64, ArrangeError> {
    if minimum > maximum {
        return Err(ArrangeError::InvertedBounds { minimum, maximum });
    }

    let gap = (maximum as i128 - minimum as i128 + 1) as f64;
    let offset = (rng.next_unit() * gap) as i128;

    // Wide ranges can round up to `maximum + 1` in f64
    let value = (minimum as i128 + offset).clamp(minimum as i128, maximum as i128);

    Ok(value as i64)
}

/// [`random_int`] over `usize` bounds, used for counts and indices
pub fn random_index<R: RandomSource + ?Sized>(
    rng: &mut R,
    lower: usize,
    upper: usize,
) -> Result<usize, ArrangeError> {
    let lower = i64::try_from(lower).unwrap_or(i64::MAX);
    let upper = i64::try_from(upper).unwrap_or(i64::MAX);

    random_int(rng, lower, upper).map(|value| value as usize)
}

/// Convert an untyped JSON bound into an integer
///
/// Integral floats such as `3.0` are accepted; anything else is a type error.
pub fn integer_bound(name: &'static str, value: &Value) -> Result<i64, ArrangeError> {
    let not_integer = || ArrangeError::NotInteger {
        name,
        value: value.to_string(),
    };

    let Value::Number(number) = value else {
        return Err(not_integer());
    };

    if let Some(int) = number.as_i64() {
        return Ok(int);
    }

    match number.as_f64() {
        Some(float)
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        _ => Err(not_integer()),
    }
}

/// Parse a textual bound (e.g. a command line argument) into an integer
pub fn parse_bound(name: &'static str, raw: &str) -> Result<i64, ArrangeError> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|_| ArrangeError::NotInteger {
        name,
        value: raw.to_string(),
    })?;

    integer_bound(name, &value)
}
