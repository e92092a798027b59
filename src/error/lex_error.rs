#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that belongs to no token.
    UnexpectedCharacter {
        /// The offending character.
        found:  char,
        /// Byte column in the source line where the character starts.
        column: usize,
    },
    /// A digit run did not fit the integer type. Rejected explicitly rather
    /// than silently wrapped.
    NumberTooLarge {
        /// The digits as they appeared in the source.
        literal: String,
        /// Byte column in the source line where the literal starts.
        column:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unexpected character '{found}'.")
            },
            Self::NumberTooLarge { literal, column } => {
                write!(f, "Error at column {column}: Number literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
