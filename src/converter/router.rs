use num_bigint::BigUint;

use crate::{
    converter::{
        base::Base,
        numerical::{format_magnitude, parse_magnitude},
        text::{from_code_points, to_code_points},
    },
    error::ConversionError,
    util::num::magnitude_to_i64_checked,
};

pub type ConvResult<T> = Result<T, ConversionError>;

/// Converts a value from a source base to a target base.
///
/// The path is chosen by comparing both endpoints against the text
/// sentinel:
///
/// - **Text to radix**: every character of the input becomes its code
///   point, each code point is rendered independently under the target
///   base, and the renderings are joined with single spaces.
/// - **Radix to text**: the input is split on runs of whitespace, every
///   token is parsed as a magnitude under the source base and narrowed to a
///   code point, and the code points are reassembled into a string.
/// - **Radix to radix**: all whitespace is stripped, the remainder is
///   parsed once and rendered once. Binary output is additionally grouped
///   into quartets for readability.
///
/// Callers normally short-circuit empty input and equal endpoints before
/// calling; a text-to-text request returns the input unchanged so the
/// function stays total.
///
/// The function is pure: the same input and bases always produce the same
/// output or the same error, and nothing is cached between calls.
///
/// # Parameters
/// - `input`: The value to convert, exactly as the user supplied it.
/// - `from`: The base the input is written in.
/// - `to`: The base to render the result in.
///
/// # Returns
/// - `Ok(String)`: The converted value.
/// - `Err(ConversionError)`: Why the input could not be converted.
///
/// # Example
/// ```
/// use radixa::converter::{Base, router::convert};
///
/// let grouped = convert("FF", Base::Radix(16), Base::Radix(2)).unwrap();
/// assert_eq!(grouped, "1111 1111");
///
/// let codes = convert("A", Base::Text, Base::Radix(10)).unwrap();
/// assert_eq!(codes, "65");
///
/// let text = convert("72 73", Base::Radix(10), Base::Text).unwrap();
/// assert_eq!(text, "HI");
/// ```
pub fn convert(input: &str, from: Base, to: Base) -> ConvResult<String> {
    match (from, to) {
        (Base::Text, Base::Text) => Ok(input.to_string()),

        (Base::Text, Base::Radix(base)) => {
            let rendered: Vec<String> =
                to_code_points(input).into_iter()
                                     .map(|code| format_magnitude(&BigUint::from(code), base))
                                     .collect();

            Ok(rendered.join(" "))
        },

        (Base::Radix(base), Base::Text) => {
            let codes = input.split_whitespace()
                             .map(|token| {
                                 let magnitude = parse_magnitude(token, base)?;
                                 magnitude_to_i64_checked(&magnitude)
                             })
                             .collect::<ConvResult<Vec<i64>>>()?;

            from_code_points(&codes)
        },

        (Base::Radix(from), Base::Radix(to)) => {
            let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            let magnitude = parse_magnitude(&compact, from)?;
            let rendered = format_magnitude(&magnitude, to);

            if to == 2 {
                return Ok(group_quartets(&rendered));
            }

            Ok(rendered)
        },
    }
}

/// Pads a binary rendering to a multiple of four digits and spaces it into
/// quartets. Presentation only; the grouping carries no numeric meaning.
fn group_quartets(digits: &str) -> String {
    let width = digits.len().next_multiple_of(4);
    let padded = format!("{digits:0>width$}");

    let mut grouped = String::with_capacity(padded.len() + padded.len() / 4);

    for (i, ch) in padded.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}
