#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Every variant names the construct the parser expected; where a token was
/// actually present, it also carries that token and its column.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// The construct the parser was looking for.
        expected: &'static str,
        /// The token encountered, rendered as source text.
        found:    String,
        /// Byte column in the source line.
        column:   usize,
    },
    /// Reached the end of the token sequence while a construct was still
    /// required.
    UnexpectedEndOfInput {
        /// The construct the parser was looking for.
        expected: &'static str,
    },
    /// Found extra tokens after the statement's closing parenthesis.
    UnexpectedTrailingTokens {
        /// The first extra token, rendered as source text.
        found:  String,
        /// Byte column in the source line.
        column: usize,
    },
    /// The statement wrapper identifier did not match the required keyword.
    WrongKeyword {
        /// The keyword the caller required.
        expected: String,
        /// The identifier actually present.
        found:    String,
        /// Byte column in the source line.
        column:   usize,
    },
    /// Expression nesting exceeded the parser's recursion guard.
    ExpressionTooDeep {
        /// The nesting limit that was exceeded.
        limit:  usize,
        /// Byte column in the source line.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, column } => {
                write!(f, "Error at column {column}: Expected {expected}, found '{found}'.")
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {expected}, found end of input.")
            },
            Self::UnexpectedTrailingTokens { found, column } => {
                write!(f,
                       "Error at column {column}: Extra tokens after statement, starting with '{found}'.")
            },
            Self::WrongKeyword { expected, found, column } => {
                write!(f,
                       "Error at column {column}: Expected keyword '{expected}', found '{found}'.")
            },
            Self::ExpressionTooDeep { limit, column } => {
                write!(f,
                       "Error at column {column}: Expression nesting exceeds the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
