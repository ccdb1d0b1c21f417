/// Lexing errors.
///
/// Raised by the lexer when the source contains a character that cannot
/// start any token, or an integer literal that does not fit in an `i64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all grammar violations detected while building the AST: unexpected
/// tokens, unbalanced parentheses, trailing input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a well formed AST,
/// namely division by zero and integer overflow.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::{ParseError, ParseErrorKind};
pub use runtime_error::{EvaluationError, EvaluationErrorKind};

/// Any failure that can stop the parser.
///
/// The parser pulls tokens from the lexer on demand, so both lexical and
/// grammatical errors surface from the same call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The error returned by [`crate::evaluate`].
///
/// Every failure is terminal for the evaluated source: no partial result is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationFailure {
    /// An unrecognized character or oversized literal.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A grammar violation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A failure while computing the value of a parsed expression.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl From<SyntaxError> for EvaluationFailure {
    fn from(error: SyntaxError) -> Self {
        match error {
            SyntaxError::Lex(e) => Self::Lex(e),
            SyntaxError::Parse(e) => Self::Parse(e),
        }
    }
}

impl EvaluationFailure {
    /// Returns the byte offset in the source the failure points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position,
            Self::Parse(e) => e.position,
            Self::Evaluation(e) => e.position,
        }
    }

    /// Formats the error below `source` with a caret under the offending
    /// column.
    ///
    /// Tabs before the error are kept so the caret lines up however the
    /// terminal expands them.
    ///
    /// # Example
    /// ```
    /// let source = "\t4 / 0";
    /// let failure = intcalc::evaluate(source).unwrap_err();
    /// assert_eq!(failure.render(source), "\t4 / 0\n\t  ^\nError at column 4: Division by zero.");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let indent: String = source.get(..self.position())
                                   .unwrap_or(source)
                                   .chars()
                                   .map(|c| if c == '\t' { '\t' } else { ' ' })
                                   .collect();
        format!("{source}\n{indent}^\n{self}")
    }
}
