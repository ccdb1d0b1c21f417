use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the lowest precedence level and handles the left-associative
    /// binary operators `+` and `-`. Repeated operators fold from the left, so
    /// `8 - 3 - 2` becomes `(8 - 3) - 2`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or the single term if no operator follows.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek().0)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let (_, position) = self.advance()?;
                let right = self.parse_term()?;
                left = Expr::BinaryOp { op,
                                        left: Box::new(left),
                                        right: Box::new(right),
                                        position };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*` and `/`, which bind tighter
    /// than `+` and `-`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek().0)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let (_, position) = self.advance()?;
                let right = self.parse_factor()?;
                left = Expr::BinaryOp { op,
                                        left: Box::new(left),
                                        right: Box::new(right),
                                        position };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for literals, parentheses and the end-of-input marker.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Integer(_) | Token::LParen | Token::RParen | Token::EndOfInput => None,
    }
}
