use num_bigint::BigUint;
use num_traits::Zero;

use crate::{converter::router::ConvResult, error::ConversionError};

/// The ordered digit alphabet shared by every supported base.
///
/// A character's index in this sequence is its digit value, and a character
/// is a valid digit for base `B` exactly when its index is below `B`.
pub const DIGIT_ALPHABET: &str = "0123456789abcdef";

/// Parses a digit sequence under a base into a magnitude.
///
/// Digits are read case-insensitively, left to right, and accumulated
/// positionally, so the magnitude never overflows no matter how long the
/// input is. A string that is empty after trimming parses as zero. The
/// input must already be free of spacing; the router strips or splits
/// whitespace per conversion path before calling this, and any whitespace
/// that reaches this function is an invalid digit like any other
/// non-alphabet character.
///
/// # Parameters
/// - `text`: The digit sequence to parse.
/// - `base`: The base to parse under; must lie within 2 to 16.
///
/// # Returns
/// - `Ok(BigUint)`: The accumulated magnitude.
/// - `Err(ConversionError::UnsupportedFeature)`: If the input contains a
///   decimal point, which is reserved.
/// - `Err(ConversionError::InvalidDigit)`: If any character is not a digit
///   of the base.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use radixa::{converter::numerical::parse_magnitude, error::ConversionError};
///
/// let value = parse_magnitude("ff", 16).unwrap();
/// assert_eq!(value, BigUint::from(255_u32));
///
/// // Empty input is zero, never an error.
/// assert_eq!(parse_magnitude("", 10).unwrap(), BigUint::ZERO);
///
/// // The offending character is carried uppercased.
/// let err = parse_magnitude("g", 16).unwrap_err();
/// assert_eq!(err, ConversionError::InvalidDigit { digit: 'G', base: 16 });
///
/// // A digit may exist in the alphabet yet exceed the base.
/// let err = parse_magnitude("2", 2).unwrap_err();
/// assert_eq!(err, ConversionError::InvalidDigit { digit: '2', base: 2 });
///
/// let err = parse_magnitude("3.14", 10).unwrap_err();
/// assert_eq!(err, ConversionError::UnsupportedFeature);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn parse_magnitude(text: &str, base: u8) -> ConvResult<BigUint> {
    let sanitized = text.to_lowercase();
    if sanitized.trim().is_empty() {
        return Ok(BigUint::zero());
    }

    let mut value = BigUint::zero();

    for ch in sanitized.chars() {
        // Reserved for fractional support in a future version.
        if ch == '.' {
            return Err(ConversionError::UnsupportedFeature);
        }

        match DIGIT_ALPHABET.find(ch) {
            Some(digit) if digit < usize::from(base) => {
                value = value * u32::from(base) + digit as u32;
            },

            _ => {
                return Err(ConversionError::InvalidDigit { digit: ch.to_ascii_uppercase(),
                                                           base });
            },
        }
    }

    Ok(value)
}
/// Renders a magnitude under a base using the shared digit alphabet.
///
/// Digit values of ten and above render as uppercase letters. Zero renders
/// as `"0"`, and no sign is ever produced.
///
/// # Parameters
/// - `value`: The magnitude to render.
/// - `base`: The base to render under; must lie within 2 to 16.
///
/// # Returns
/// The rendered digit sequence.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use radixa::converter::numerical::format_magnitude;
///
/// assert_eq!(format_magnitude(&BigUint::from(255_u32), 16), "FF");
/// assert_eq!(format_magnitude(&BigUint::from(255_u32), 2), "11111111");
/// assert_eq!(format_magnitude(&BigUint::ZERO, 7), "0");
/// ```
pub fn format_magnitude(value: &BigUint, base: u8) -> String {
    value.to_str_radix(u32::from(base)).to_uppercase()
}
