use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement, consuming the entire token sequence.
///
/// Grammar: `statement := "(" IDENTIFIER expression ")"`
///
/// The identifier is the statement wrapper. The grammar accepts any
/// alphabetic identifier in that position; whether a specific keyword is
/// required is the caller's choice:
///
/// - `required_keyword: None` accepts any identifier (lenient).
/// - `required_keyword: Some(word)` rejects a mismatch with
///   [`ParseError::WrongKeyword`].
///
/// Tokens remaining after the closing `)` are an error: one line carries
/// exactly one statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, column)` pairs for one
///   whole line.
/// - `required_keyword`: Wrapper keyword policy.
///
/// # Returns
/// The statement's syntax tree, rooted at a
/// [`UnaryOperator::Wrapper`] node whose child is the expression subtree.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the statement does not open with `(`,
/// - the token after `(` is not an identifier,
/// - the identifier does not match a required keyword,
/// - the expression or the closing `)` is malformed or missing,
/// - extra tokens follow the statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              required_keyword: Option<&str>)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let column = match tokens.next() {
        Some((Token::LParen, column)) => *column,
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { expected: "'(' to open a statement",
                                                     found:    tok.to_string(),
                                                     column:   *column, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected:
                                                              "'(' to open a statement" });
        },
    };

    match tokens.next() {
        Some((Token::Identifier(name), name_column)) => {
            if let Some(expected) = required_keyword {
                if name != expected {
                    return Err(ParseError::WrongKeyword { expected: expected.to_owned(),
                                                          found:    name.clone(),
                                                          column:   *name_column, });
                }
            }
        },
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { expected: "a wrapper identifier",
                                                     found:    tok.to_string(),
                                                     column:   *column, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "a wrapper identifier" });
        },
    }

    let expr = parse_expression(tokens, 0)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { expected: "')' to close the statement",
                                                     found:    tok.to_string(),
                                                     column:   *column, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected:
                                                              "')' to close the statement" });
        },
    }

    if let Some((tok, trailing_column)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { found:  tok.to_string(),
                                                          column: *trailing_column, });
    }

    Ok(Expr::UnaryOp { op: UnaryOperator::Wrapper,
                       expr: Box::new(expr),
                       column })
}
