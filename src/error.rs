/// Conversion errors.
///
/// Defines all error types that can occur while the engine parses, narrows,
/// or renders a value. Conversion errors are input-validation failures such
/// as invalid digits, reserved syntax, or numbers that do not identify a
/// Unicode scalar value.
pub mod conversion_error;
/// Base selection errors.
///
/// Contains the error types raised while interpreting a base selector before
/// any conversion runs. These cover strings that do not name a base at all
/// and numeric bases outside the supported range.
pub mod base_error;

pub use base_error::BaseError;
pub use conversion_error::ConversionError;
