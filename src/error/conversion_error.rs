#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during a conversion.
///
/// Every failure is classified by variant; callers decide presentation by
/// matching on the variant, never by inspecting message text.
pub enum ConversionError {
    /// A character is not a valid digit for the declared base.
    InvalidDigit {
        /// The offending character, uppercased for display.
        digit: char,
        /// The base the character was parsed under.
        base:  u8,
    },
    /// A decimal point was used. Fractional values are reserved for a
    /// future version and rejected for now.
    UnsupportedFeature,
    /// A number does not identify a valid Unicode scalar value.
    CodePointOutOfRange {
        /// The offending value, rendered in decimal.
        value: String,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDigit { digit, base } => {
                write!(f, "The character '{digit}' is not a valid digit for Base-{base}.")
            },

            Self::UnsupportedFeature => {
                write!(f, "Decimal points ('.') are not supported in this version.")
            },

            Self::CodePointOutOfRange { value } => {
                write!(f, "The value {value} is not a valid character code.")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
