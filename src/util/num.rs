use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::{converter::router::ConvResult, error::ConversionError};

/// Safely narrows a magnitude to an `i64` if and only if it fits.
///
/// Magnitudes are unbounded, but a character code must fit the machine
/// integer domain before it can be checked against the Unicode scalar
/// range. A magnitude too large for `i64` can never be a scalar value, so
/// the failure is reported as an out-of-range character code rather than
/// silently truncated.
///
/// ## Errors
/// Returns `ConversionError::CodePointOutOfRange` if the value exceeds
/// `i64::MAX`.
///
/// ## Parameters
/// - `value`: The magnitude to narrow.
///
/// ## Returns
/// - `Ok(i64)`: The narrowed value if it fits.
/// - `Err(ConversionError::CodePointOutOfRange)`: If it does not.
///
/// ## Example
/// ```
/// use num_bigint::BigUint;
/// use radixa::util::num::magnitude_to_i64_checked;
///
/// let value = magnitude_to_i64_checked(&BigUint::from(65_u32)).unwrap();
/// assert_eq!(value, 65);
///
/// let huge = BigUint::from(u128::MAX);
/// assert!(magnitude_to_i64_checked(&huge).is_err());
/// ```
pub fn magnitude_to_i64_checked(value: &BigUint) -> ConvResult<i64> {
    value.to_i64()
         .ok_or_else(|| ConversionError::CodePointOutOfRange { value: value.to_string() })
}
/// Safely narrows an `i64` to a Unicode scalar value.
///
/// Rejects negative values, values above `U+10FFFF`, and surrogate code
/// points, all of which fail to identify a scalar value.
///
/// ## Errors
/// Returns `ConversionError::CodePointOutOfRange` for any value that is not
/// a scalar value.
///
/// ## Parameters
/// - `value`: The integer to narrow.
///
/// ## Returns
/// - `Ok(char)`: The identified scalar value.
/// - `Err(ConversionError::CodePointOutOfRange)`: If the value identifies
///   none.
///
/// ## Example
/// ```
/// use radixa::util::num::i64_to_scalar_checked;
///
/// assert_eq!(i64_to_scalar_checked(72).unwrap(), 'H');
/// assert_eq!(i64_to_scalar_checked(0x1F600).unwrap(), '😀');
///
/// assert!(i64_to_scalar_checked(-1).is_err());
/// assert!(i64_to_scalar_checked(0xD800).is_err());
/// assert!(i64_to_scalar_checked(0x110000).is_err());
/// ```
pub fn i64_to_scalar_checked(value: i64) -> ConvResult<char> {
    u32::try_from(value).ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| ConversionError::CodePointOutOfRange { value: value.to_string() })
}
