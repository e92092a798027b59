use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a source line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Non-negative integer literal tokens, such as `42`. A leading `-` is
    /// never part of the literal; it always lexes as a separate [`Token::Minus`].
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Identifier tokens; a maximal run of alphabetic characters, such as
    /// `simplify`. The lexer carries the matched text verbatim and leaves any
    /// keyword check to the parser.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` if the digit run does not fit an `i64`, which makes the
/// token an error; `tokenize` then reports it as [`LexError::NumberTooLarge`]
/// instead of letting the value wrap.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits one source line into tokens paired with their byte columns.
///
/// A pure function of the line: each call produces a fresh sequence and no
/// state survives between calls.
///
/// # Parameters
/// - `line`: A single line of source text, without its line terminator.
///
/// # Returns
/// The ordered token sequence as `(Token, column)` pairs.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for a character belonging to no token.
/// - [`LexError::NumberTooLarge`] for a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use simplisp::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 2 3)").unwrap();
/// assert_eq!(tokens[0], (Token::LParen, 0));
/// assert_eq!(tokens[1], (Token::Plus, 1));
/// assert_eq!(tokens[2], (Token::Number(2), 3));
/// ```
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                let column = lexer.span().start;
                let found = lexer.slice()
                                 .chars()
                                 .next()
                                 .unwrap_or(char::REPLACEMENT_CHARACTER);
                // A failing slice that starts with a digit can only be an
                // overflowing literal; everything else is an unknown character.
                return Err(if found.is_ascii_digit() {
                    LexError::NumberTooLarge { literal: lexer.slice().to_owned(),
                                               column }
                } else {
                    LexError::UnexpectedCharacter { found, column }
                });
            },
        }
    }

    Ok(tokens)
}
