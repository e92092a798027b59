/// Core expression parsing.
///
/// Contains the recursive-descent routines for the `Expression` production
/// and the shared result alias.
pub mod core;

/// Statement parsing.
///
/// Implements the top-level `Statement` production, including the wrapper
/// keyword policy and the whole-sequence consumption check.
pub mod statement;
