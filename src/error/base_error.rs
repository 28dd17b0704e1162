#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while selecting a base.
pub enum BaseError {
    /// The text does not name a base at all.
    Unrecognized {
        /// The text that was supplied.
        found: String,
    },
    /// A numeric base outside the supported range.
    OutOfRange {
        /// The base that was requested.
        found: u32,
    },
}

impl std::fmt::Display for BaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized { found } => {
                write!(f, "'{found}' does not name a base. Use a number from 2 to 16, or 'text'.")
            },

            Self::OutOfRange { found } => {
                write!(f, "Base-{found} is not supported. Bases range from 2 to 16.")
            },
        }
    }
}

impl std::error::Error for BaseError {}
