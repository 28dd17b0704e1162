use crate::{converter::router::ConvResult, util::num::i64_to_scalar_checked};

/// Decomposes a string into its Unicode scalar values, in order.
///
/// One code point is produced per character, including characters outside
/// the basic multilingual plane, which are never split into surrogate
/// halves. Decomposition cannot fail; every character of a string already
/// identifies a scalar value.
///
/// # Parameters
/// - `text`: The string to decompose.
///
/// # Returns
/// The code points of the string, in order.
///
/// # Example
/// ```
/// use radixa::converter::text::to_code_points;
///
/// assert_eq!(to_code_points("Hi"), vec![72, 105]);
///
/// // A supplementary-plane character is one code point, not two.
/// assert_eq!(to_code_points("😀"), vec![0x1F600]);
/// ```
pub fn to_code_points(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}
/// Rebuilds a string from a sequence of code points, in order.
///
/// The integers are untrusted: each one is checked before it becomes a
/// character, so a value that does not identify a Unicode scalar value
/// fails the whole conversion instead of producing partial output.
///
/// # Parameters
/// - `codes`: The code points to concatenate.
///
/// # Returns
/// - `Ok(String)`: The rebuilt string.
/// - `Err(ConversionError::CodePointOutOfRange)`: If any value is negative
///   or otherwise not a scalar value.
///
/// # Example
/// ```
/// use radixa::{converter::text::from_code_points, error::ConversionError};
///
/// assert_eq!(from_code_points(&[72, 73]).unwrap(), "HI");
///
/// let err = from_code_points(&[-1]).unwrap_err();
/// assert_eq!(err,
///            ConversionError::CodePointOutOfRange { value: "-1".to_string() });
/// ```
pub fn from_code_points(codes: &[i64]) -> ConvResult<String> {
    codes.iter()
         .map(|&code| i64_to_scalar_checked(code))
         .collect()
}
