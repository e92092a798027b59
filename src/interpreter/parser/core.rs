use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum expression nesting the parser accepts.
///
/// The grammar itself places no bound on depth, so adversarial input could
/// otherwise exhaust the stack; parsing past this limit fails with
/// [`ParseError::ExpressionTooDeep`]. The bound also caps the recursion of
/// every later tree walk, since no deeper tree can exist.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Parses a single expression.
///
/// Grammar:
/// ```text
///     expression := NUMBER
///                 | "(" ("+" | "*") expression expression ")"
///                 | "(" "-" expression [ expression ] ")"
/// ```
/// The arity of `-` is decided by lookahead, not token content: one operand
/// expression is parsed unconditionally, and a `)` immediately after it makes
/// the production unary negation, while anything else makes it binary
/// subtraction with a second operand. Both arms then consume the closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Current nesting level, starting at 0 for the statement's
///   outermost expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if an expression position holds neither `(` nor a
///   number, or an unknown operator follows `(`.
/// - `UnexpectedEndOfInput` if the sequence ends mid-expression; running out
///   of tokens is never an out-of-bounds access.
/// - `ExpressionTooDeep` past [`MAX_EXPRESSION_DEPTH`] levels of nesting.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Number(value), column)) => {
            let (value, column) = (*value, *column);
            tokens.next();
            Ok(Expr::Number { value, column })
        },
        Some((Token::LParen, column)) => {
            if depth >= MAX_EXPRESSION_DEPTH {
                return Err(ParseError::ExpressionTooDeep { limit:  MAX_EXPRESSION_DEPTH,
                                                           column: *column, });
            }
            tokens.next();
            parse_operator_application(tokens, depth)
        },
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { expected: "a number or '('",
                                              found:    tok.to_string(),
                                              column:   *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "a number or '('" }),
    }
}

/// Parses the operator and operands of a parenthesized application, with the
/// opening `(` already consumed.
fn parse_operator_application<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (op_token, column) = match tokens.next() {
        Some((tok @ (Token::Plus | Token::Minus | Token::Star), column)) => (tok, *column),
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { expected: "an operator '+', '-' or '*'",
                                                     found:    tok.to_string(),
                                                     column:   *column, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected:
                                                              "an operator '+', '-' or '*'" });
        },
    };

    if matches!(op_token, Token::Minus) {
        return parse_minus_application(tokens, depth, column);
    }

    let op = match op_token {
        Token::Plus => BinaryOperator::Add,
        Token::Star => BinaryOperator::Mul,
        _ => unreachable!(),
    };

    let left = parse_expression(tokens, depth + 1)?;
    let right = parse_expression(tokens, depth + 1)?;
    expect_closing_paren(tokens)?;

    Ok(Expr::BinaryOp { op,
                        left: Box::new(left),
                        right: Box::new(right),
                        column })
}

/// Parses the operands of a `-` application, with `(` and `-` already
/// consumed.
///
/// One operand is parsed unconditionally; a `)` next means unary negation,
/// anything else means binary subtraction with a second operand.
fn parse_minus_application<'a, I>(tokens: &mut Peekable<I>,
                                  depth: usize,
                                  column: usize)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = parse_expression(tokens, depth + 1)?;

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  expr: Box::new(first),
                                  column });
    }

    let second = parse_expression(tokens, depth + 1)?;
    expect_closing_paren(tokens)?;

    Ok(Expr::BinaryOp { op: BinaryOperator::Sub,
                        left: Box::new(first),
                        right: Box::new(second),
                        column })
}

/// Consumes the next token, requiring it to be `)`.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { expected: "a closing parenthesis ')'",
                                              found:    tok.to_string(),
                                              column:   *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "a closing parenthesis ')'" }),
    }
}
