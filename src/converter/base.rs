use std::str::FromStr;

use crate::error::BaseError;

/// Smallest supported numeral base.
pub const MIN_RADIX: u8 = 2;
/// Largest supported numeral base.
pub const MAX_RADIX: u8 = 16;

/// Represents one endpoint of a conversion.
///
/// A value is either read from (or written to) a positional numeral base, or
/// treated as literal text. Every `Radix` produced by [`Base::radix`] or
/// [`FromStr`] lies between [`MIN_RADIX`] and [`MAX_RADIX`] inclusive, and
/// the rest of the engine relies on that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Literal text rather than a numeral base.
    Text,
    /// A positional numeral base between 2 and 16.
    Radix(u8),
}

impl Base {
    /// Creates a numeral base, validating the supported range.
    ///
    /// # Parameters
    /// - `value`: The requested base.
    ///
    /// # Returns
    /// - `Ok(Base::Radix)`: If the base lies within 2 to 16.
    /// - `Err(BaseError::OutOfRange)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use radixa::{converter::Base, error::BaseError};
    ///
    /// assert_eq!(Base::radix(16), Ok(Base::Radix(16)));
    ///
    /// let err = Base::radix(17).unwrap_err();
    /// assert_eq!(err, BaseError::OutOfRange { found: 17 });
    /// ```
    pub const fn radix(value: u8) -> Result<Self, BaseError> {
        if value < MIN_RADIX || value > MAX_RADIX {
            return Err(BaseError::OutOfRange { found: value as u32 });
        }

        Ok(Self::Radix(value))
    }
}

impl FromStr for Base {
    type Err = BaseError;

    /// Parses a base selector.
    ///
    /// Accepts the numbers `2` through `16` and the sentinel `text` in any
    /// letter case.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::Base;
    ///
    /// assert_eq!("text".parse(), Ok(Base::Text));
    /// assert_eq!("12".parse(), Ok(Base::Radix(12)));
    /// assert!("ten".parse::<Base>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            return Ok(Self::Text);
        }

        match s.parse::<u32>() {
            Ok(value) => match u8::try_from(value) {
                Ok(small) => Self::radix(small),
                Err(_) => Err(BaseError::OutOfRange { found: value }),
            },
            Err(_) => Err(BaseError::Unrecognized { found: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Radix(value) => write!(f, "{value}"),
        }
    }
}
