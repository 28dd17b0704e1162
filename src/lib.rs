//! # radixa
//!
//! radixa is a base conversion engine written in Rust.
//! It converts values between positional numeral bases (2 to 16) and text,
//! carrying every number through arbitrary-precision arithmetic so inputs of
//! any length convert exactly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Performs the actual conversions between bases and text.
///
/// This module ties together base selection, magnitude arithmetic, text
/// decomposition, and routing to provide the complete conversion engine. It
/// exposes the types and functions that callers combine into conversions.
///
/// # Responsibilities
/// - Coordinates the core components: base, numerical, text, and router.
/// - Provides the conversion paths between numeral bases and text.
/// - Keeps every conversion a pure function of its inputs.
pub mod converter;
/// Provides unified error types for base selection and conversion.
///
/// This module defines all errors that can be raised while choosing a base
/// or converting a value. It standardizes error reporting through tagged
/// enums whose variants carry the offending character, base, or value, so
/// callers match on kinds rather than message text.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (base selection, parsing,
///   code point narrowing).
/// - Attaches the offending input fragments for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for safe numeric narrowing.
///
/// This module provides reusable narrowing routines used by the text and
/// router modules. These include checked conversions from unbounded
/// magnitudes to machine integers and from machine integers to Unicode
/// scalar values.
///
/// # Responsibilities
/// - Narrow magnitudes and integers without silent truncation.
/// - Surface impossible narrowings as typed conversion errors.
pub mod util;

pub use converter::Base;

/// Converts a value from a source base to a target base.
///
/// This is the engine's single entry point. The input is parsed under
/// `from`, carried through an arbitrary-precision magnitude (or a sequence
/// of Unicode code points when either endpoint is text), and rendered under
/// `to`. If conversion succeeds, the rendered value is returned; otherwise a
/// [`ConversionError`](error::ConversionError) describes the failure.
///
/// Callers are expected to short-circuit input that is empty after trimming
/// and requests where both endpoints are equal; see
/// [`converter::router::convert`] for the exact per-path behavior.
///
/// # Errors
/// Returns an error if the input contains a character that is not a digit
/// of the source base, uses a reserved decimal point, or names a number
/// that is not a valid Unicode character code.
///
/// # Examples
/// ```
/// use radixa::{Base, convert};
///
/// // Radix to radix, with binary output grouped into quartets.
/// let grouped = convert("FF", Base::Radix(16), Base::Radix(2)).unwrap();
/// assert_eq!(grouped, "1111 1111");
///
/// // Text decomposes per character; an emoji is a single code point.
/// let hex = convert("😀", Base::Text, Base::Radix(16)).unwrap();
/// assert_eq!(hex, "1F600");
///
/// // Example with an intentional error (digit outside the base).
/// let res = convert("2", Base::Radix(2), Base::Radix(10));
/// assert!(res.is_err());
/// ```
pub fn convert(input: &str, from: Base, to: Base) -> Result<String, error::ConversionError> {
    converter::router::convert(input, from, to)
}
