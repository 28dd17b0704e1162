/// Numeric narrowing helpers.
///
/// This module provides safe functions for narrowing between magnitudes,
/// machine integers, and Unicode scalar values without silent truncation.
/// Use these helpers whenever an arbitrary-precision value or an untrusted
/// integer needs to become a character.
///
/// All functions return a `Result`, which is `Ok` if the narrowing is exact
/// and valid, or a typed error if the value is out of range.
pub mod num;
