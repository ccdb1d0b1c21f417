use std::mem;

use crate::{
    ast::Expr,
    error::{ParseError, ParseErrorKind, SyntaxError},
    interpreter::lexer::{Lexer, Spanned, Token},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Maximum number of nested parenthesis levels accepted by the parser.
///
/// The parser recurses once per open parenthesis; operator chains are parsed
/// in loops. The limit bounds parser stack usage for input such as ten
/// thousand `(`.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A recursive descent parser over a lazily lexed token stream.
///
/// The parser keeps exactly one token of lookahead and pulls the next one
/// from its [`Lexer`] only when the current one is consumed. A parser is
/// single-use: [`Parser::parse`] takes it by value.
pub struct Parser<'src> {
    lexer:            Lexer<'src>,
    current:          Spanned,
    /// Number of currently open parentheses.
    pub(crate) depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser for `source` and reads its first token.
    ///
    /// # Errors
    /// Returns a [`SyntaxError::Lex`] if the first token cannot be lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0 })
    }

    /// Parses a full expression and requires that no input follows it.
    ///
    /// Grammar:
    /// ```text
    ///     input := expression END_OF_INPUT
    /// ```
    ///
    /// # Errors
    /// - [`ParseErrorKind::TrailingInput`] if tokens remain after the
    ///   expression.
    /// - Propagates lexer errors and errors from sub-expression parsing.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        match self.current {
            (Token::EndOfInput, _) => {
                tracing::trace!("parsed {expr}");
                Ok(expr)
            },
            found => Err(syntax_error(ParseErrorKind::TrailingInput, found)),
        }
    }

    /// Returns the current lookahead token without consuming it.
    pub(crate) const fn peek(&self) -> Spanned {
        self.current
    }

    /// Consumes the current token, reads the next one from the lexer, and
    /// returns the consumed token.
    pub(crate) fn advance(&mut self) -> ParseResult<Spanned> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }
}

/// Builds a [`SyntaxError::Parse`] pointing at `found`.
pub(crate) fn syntax_error(kind: ParseErrorKind, (found, position): Spanned) -> SyntaxError {
    SyntaxError::Parse(ParseError { kind,
                                    position,
                                    found })
}

/// Parses `source` into an expression tree.
///
/// This is the single entry point of the parser. It constructs the lexer
/// internally and consumes tokens until [`Token::EndOfInput`].
///
/// # Errors
/// Returns a [`SyntaxError`] if the source contains an unrecognized
/// character or does not match the grammar.
///
/// # Example
/// ```
/// use intcalc::{ast::Expr, interpreter::parser::core::parse};
///
/// let ast = parse("(1)").unwrap();
/// assert_eq!(ast, Expr::Literal { value: 1, position: 1 });
/// assert!(parse("(1").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(source)?.parse()
}
