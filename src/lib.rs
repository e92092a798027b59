//! # simplisp
//!
//! simplisp is a line-oriented evaluator for a minimal prefix arithmetic
//! language. Each line holds one statement of the form
//! `(simplify <expression>)`; the crate tokenizes it, parses it by recursive
//! descent into a syntax tree, evaluates the tree to an integer, and formats
//! the result as text that is itself valid input to the grammar.
//!
//! Despite the wrapper keyword's name, nothing is simplified symbolically:
//! the pipeline purely evaluates. There are no variables, no floating-point
//! values, and no state shared between lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    error::LineError,
    interpreter::{
        evaluator::evaluate, formatter::format_value, lexer::tokenize,
        parser::statement::parse_statement,
    },
};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of a statement as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node shapes: number literal, unary operation,
///   binary operation.
/// - Attaches source columns to nodes for error reporting.
/// - Makes malformed tree shapes unrepresentable.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// single line. Each error carries enough position detail to point at the
/// offending piece of the line, and [`LineError`] unifies the three stages at
/// the line-iteration boundary.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the per-line pipeline.
///
/// This module ties together the lexer, parser, evaluator, and formatter.
/// Control flows strictly forward: tokens feed the parser, the tree feeds the
/// evaluator, and the value feeds the formatter. No stage retains state
/// across lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, formatter.
/// - Provides the building blocks behind [`evaluate_line`] and [`run_lines`].
pub mod interpreter;

/// Evaluates one source line to its integer value.
///
/// Runs the full pipeline for a single line: tokenize, parse, evaluate. The
/// line is expected to hold exactly one statement.
///
/// The wrapper keyword policy is explicit: `required_keyword: None` accepts
/// any alphabetic identifier in the wrapper position, `Some(word)` rejects
/// everything but `word`.
///
/// # Errors
/// Returns a [`LineError`] wrapping the failing stage's error. Repeated calls
/// on the same line always produce the same result; the function is pure.
///
/// # Examples
/// ```
/// use simplisp::evaluate_line;
///
/// let value = evaluate_line("(simplify (+ 2 (* 3 4)))", None).unwrap();
/// assert_eq!(value, 14);
///
/// // The wrapper identifier is only checked when a keyword is required.
/// assert!(evaluate_line("(anything 7)", None).is_ok());
/// assert!(evaluate_line("(anything 7)", Some("simplify")).is_err());
/// ```
pub fn evaluate_line(line: &str, required_keyword: Option<&str>) -> Result<i64, LineError> {
    let tokens = tokenize(line)?;
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter, required_keyword)?;
    Ok(evaluate(&statement)?)
}

/// Processes every line of `source`, writing results and diagnostics.
///
/// Lines are handled independently and in input order. Blank lines are
/// skipped. A successful line writes `format_value(result)` to `out`; a line
/// that fails at any stage writes one diagnostic naming the original line and
/// the error to `diag`, and processing continues with the next line. A
/// failing line is never fatal to the run.
///
/// # Errors
/// Returns an error only if writing to `out` or `diag` fails.
///
/// # Examples
/// ```
/// use simplisp::run_lines;
///
/// let source = "(simplify (+ 2 @))\n(simplify 7)\n";
/// let mut out = Vec::new();
/// let mut diag = Vec::new();
///
/// run_lines(source, None, &mut out, &mut diag).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n");
/// assert_eq!(String::from_utf8(diag).unwrap().lines().count(), 1);
/// ```
pub fn run_lines<W: Write, E: Write>(source: &str,
                                     required_keyword: Option<&str>,
                                     out: &mut W,
                                     diag: &mut E)
                                     -> io::Result<()> {
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_line(line, required_keyword) {
            Ok(value) => writeln!(out, "{}", format_value(value))?,
            Err(e) => writeln!(diag, "Error evaluating statement: {line} - {e}")?,
        }
    }
    Ok(())
}
