use crate::interpreter::lexer::Token;

/// The grammar rule that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token did not fit the rule being parsed, e.g. an operator where an
    /// integer or `(` was required.
    UnexpectedToken,
    /// The input ended before the `)` matching an open `(`.
    UnmatchedParen,
    /// A complete expression was parsed but more tokens follow it.
    TrailingInput,
    /// Parentheses are nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingTooDeep,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
#[error("{}", describe(self))]
pub struct ParseError {
    /// The violated rule.
    pub kind:     ParseErrorKind,
    /// Byte offset the error points at. For [`ParseErrorKind::UnmatchedParen`]
    /// this is the unclosed `(`.
    pub position: usize,
    /// The token that was read when the error was detected.
    pub found:    Token,
}

fn describe(error: &ParseError) -> String {
    let ParseError { kind, position, found } = error;
    let column = position + 1;
    match kind {
        ParseErrorKind::UnexpectedToken => {
            format!("Error at column {column}: Unexpected token {found}.")
        },
        ParseErrorKind::UnmatchedParen => format!(
            "Error at column {column}: Expected closing parenthesis ')' but found {found}."
        ),
        ParseErrorKind::TrailingInput => {
            format!("Error at column {column}: Extra tokens after expression, starting with {found}.")
        },
        ParseErrorKind::NestingTooDeep => {
            format!("Error at column {column}: Parentheses are nested too deeply.")
        },
    }
}
