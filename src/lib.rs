//! # intcalc
//!
//! intcalc is an integer arithmetic expression evaluator written in Rust.
//! It tokenizes, parses and evaluates expressions built from non-negative
//! integer literals, `+ - * /` and parentheses.
//!
//! ```
//! assert_eq!(intcalc::evaluate("2 + 3 * 4"), Ok(14));
//! assert_eq!(intcalc::evaluate("(2 + 3) * 4"), Ok(20));
//! assert_eq!(intcalc::evaluate("8 - 3 - 2"), Ok(3));
//! ```
//!
//! Division rounds toward negative infinity by default; see
//! [`DivisionMode`] for the truncating alternative.

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
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Attaches source offsets to nodes for error reporting.
/// - Renders trees in fully parenthesised form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries a kind and the byte offset it points at, and renders
/// a single line message suitable for showing to a user.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Combines them into [`EvaluationFailure`](error::EvaluationFailure), the
///   error of [`evaluate`].
pub mod error;
/// Orchestrates the lexer, parser and evaluator.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating expressions.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Floor and truncating integer division without panics.
pub mod util;

pub use crate::{
    ast::Expr,
    error::EvaluationFailure,
    interpreter::{
        evaluator::core::{Context, DivisionMode},
        parser::core::parse,
    },
};

/// Evaluates an expression using floor division.
///
/// Each call lexes, parses and evaluates `source` from scratch; nothing is
/// cached or shared between calls.
///
/// # Errors
/// Returns an [`EvaluationFailure`] if the source contains an unrecognized
/// character, does not match the grammar, divides by zero or overflows.
///
/// # Examples
/// ```
/// use intcalc::{
///     EvaluationFailure, evaluate,
///     error::{EvaluationErrorKind, ParseErrorKind},
/// };
///
/// assert_eq!(evaluate("4-1*4+12/5+2*2"), Ok(6));
/// assert_eq!(evaluate("(0 - 7) / 2"), Ok(-4));
///
/// match evaluate("4 / 0") {
///     Err(EvaluationFailure::Evaluation(e)) => {
///         assert_eq!(e.kind, EvaluationErrorKind::DivisionByZero);
///     },
///     other => panic!("unexpected {other:?}"),
/// }
///
/// match evaluate("-4 + 2") {
///     Err(EvaluationFailure::Parse(e)) => assert_eq!(e.kind, ParseErrorKind::UnexpectedToken),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvaluationFailure> {
    evaluate_with(source, &Context::new())
}

/// Evaluates an expression using the settings in `context`.
///
/// # Errors
/// See [`evaluate`].
///
/// # Examples
/// ```
/// use intcalc::{Context, DivisionMode, evaluate_with};
///
/// let truncate = Context::with_division(DivisionMode::Truncate);
/// assert_eq!(evaluate_with("(0 - 7) / 2", &truncate), Ok(-3));
/// assert_eq!(evaluate_with("7 / 2", &truncate), Ok(3));
/// ```
pub fn evaluate_with(source: &str, context: &Context) -> Result<i64, EvaluationFailure> {
    let expr = parse(source).inspect_err(|e| tracing::debug!("rejected {source:?}: {e}"))?;
    let value = context.eval(&expr)
                       .inspect_err(|e| tracing::debug!("failed to evaluate {source:?}: {e}"))?;
    Ok(value)
}
