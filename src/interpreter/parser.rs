/// Parser state and the public entry point.
///
/// Holds the lexer handle and the current token, and checks that a complete
/// expression consumes the whole input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+ -` and `* /`.
pub mod binary;

/// Factor parsing.
///
/// Handles integer literals and parenthesised sub-expressions.
pub mod primary;
