use crate::{
    ast::Expr,
    error::ParseErrorKind,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser, syntax_error},
    },
};

impl Parser<'_> {
    /// Parses a factor: an integer literal or a parenthesised expression.
    ///
    /// There is no unary sign: a leading `+` or `-` is rejected like any
    /// other operator in operand position.
    ///
    /// Grammar: `factor := INTEGER | "(" expression ")"`
    ///
    /// # Errors
    /// - [`ParseErrorKind::UnexpectedToken`] if the current token is neither an
    ///   integer nor `(`.
    /// - Errors from parsing a parenthesised group.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            (Token::Integer(value), position) => {
                self.advance()?;
                Ok(Expr::Literal { value, position })
            },
            (Token::LParen, open) => self.parse_group(open),
            found => Err(syntax_error(ParseErrorKind::UnexpectedToken, found)),
        }
    }

    /// Parses `"(" expression ")"` with the current token on the `(` at
    /// `open`.
    ///
    /// Grouping does not create a node: the inner expression is returned as
    /// is.
    ///
    /// # Errors
    /// - [`ParseErrorKind::NestingTooDeep`] past [`MAX_NESTING_DEPTH`] levels.
    /// - [`ParseErrorKind::UnmatchedParen`] (pointing at `open`) if the input
    ///   ends before the closing `)`.
    /// - [`ParseErrorKind::UnexpectedToken`] if another token stands where the
    ///   `)` belongs, e.g. `(1 2)`.
    fn parse_group(&mut self, open: usize) -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(syntax_error(ParseErrorKind::NestingTooDeep, (Token::LParen, open)));
        }

        self.advance()?;
        self.depth += 1;
        let inner = self.parse_expression()?;
        self.depth -= 1;

        match self.peek() {
            (Token::RParen, _) => {
                self.advance()?;
                Ok(inner)
            },
            (Token::EndOfInput, _) => {
                Err(syntax_error(ParseErrorKind::UnmatchedParen, (Token::EndOfInput, open)))
            },
            found => Err(syntax_error(ParseErrorKind::UnexpectedToken, found)),
        }
    }
}
