use std::fmt;

use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Signs are never part of a
    /// literal; `-` and `+` are always separate tokens.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Marks the end of the source. Never matched by the generated lexer;
    /// [`Lexer::next_token`] returns it once the input is exhausted.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "integer {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token paired with the byte offset of its first character.
pub type Spanned = (Token, usize);

/// Produces tokens from a source string one at a time.
///
/// The cursor only moves forward. Once the source is exhausted every further
/// call to [`Lexer::next_token`] returns [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("12 * (3)");
/// assert_eq!(lexer.next_token(), Ok((Token::Integer(12), 0)));
/// assert_eq!(lexer.next_token(), Ok((Token::Star, 3)));
/// assert_eq!(lexer.next_token(), Ok((Token::LParen, 5)));
/// assert_eq!(lexer.next_token(), Ok((Token::Integer(3), 6)));
/// assert_eq!(lexer.next_token(), Ok((Token::RParen, 7)));
/// assert_eq!(lexer.next_token(), Ok((Token::EndOfInput, 8)));
/// assert_eq!(lexer.next_token(), Ok((Token::EndOfInput, 8)));
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Token::lexer(source),
               finished: false, }
    }

    /// Returns the next token and its position.
    ///
    /// # Errors
    /// - [`LexErrorKind::UnrecognizedCharacter`] if the current character is
    ///   not whitespace, a digit, or one of `+ - * / ( )`.
    /// - [`LexErrorKind::LiteralTooLarge`] if a digit run overflows `i64`.
    pub fn next_token(&mut self) -> Result<Spanned, LexError> {
        let end = self.inner.source().len();
        if self.finished {
            return Ok((Token::EndOfInput, end));
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let position = self.inner.span().start;
                tracing::trace!("token {token} at {position}");
                Ok((token, position))
            },
            Some(Err(kind)) => {
                let position = self.inner.span().start;
                let character = self.inner.slice().chars().next().unwrap_or_default();
                Err(LexError { kind,
                               position,
                               character })
            },
            None => {
                self.finished = true;
                Ok((Token::EndOfInput, end))
            },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns [`LexErrorKind::LiteralTooLarge`] when the digits do not fit in an
/// `i64`. The regex guarantees the slice is a non-empty run of ASCII digits,
/// so overflow is the only way parsing can fail.
fn parse_integer(lex: &logos::Lexer<'_, Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}
