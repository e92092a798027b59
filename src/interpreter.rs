/// Lexical analysis.
///
/// Splits one source line into a sequence of tokens, each paired with its
/// byte column for error reporting.
pub mod lexer;

/// Syntactic analysis.
///
/// Fits a token sequence to the statement grammar by recursive descent and
/// builds the syntax tree.
pub mod parser;

/// Expression evaluation.
///
/// Walks a syntax tree in post order and computes its integer value using
/// checked arithmetic.
pub mod evaluator;

/// Result formatting.
///
/// Renders an integer as text that is itself valid input to the statement
/// grammar.
pub mod formatter;
