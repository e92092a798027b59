/// Lexing errors.
///
/// Defines the error type raised while splitting a source line into tokens:
/// unrecognized characters and integer literals too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while fitting a token sequence to
/// the statement grammar, including premature end of input and trailing
/// tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error type that can be raised while walking a syntax tree,
/// currently arithmetic overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error raised while processing a single input line.
///
/// Lexing, parsing, and evaluation failures are all caught at the point where
/// lines are iterated; this enum is what crosses that boundary. None of the
/// variants is fatal to the overall run.
#[derive(Debug)]
pub enum LineError {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The token sequence did not match the statement grammar.
    Parse(ParseError),
    /// The syntax tree could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for LineError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for LineError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for LineError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
