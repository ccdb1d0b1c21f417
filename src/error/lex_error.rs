/// The reason the lexer stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The character cannot start any token.
    #[default]
    UnrecognizedCharacter,
    /// A run of digits whose value does not fit in an `i64`.
    LiteralTooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// An error raised while splitting the source into tokens.
#[error("{}", describe(self))]
pub struct LexError {
    /// Why lexing failed.
    pub kind:      LexErrorKind,
    /// Byte offset of the offending character.
    pub position:  usize,
    /// The first character of the rejected input.
    pub character: char,
}

fn describe(error: &LexError) -> String {
    let column = error.position + 1;
    match error.kind {
        LexErrorKind::UnrecognizedCharacter => {
            format!("Error at column {column}: Unrecognized character '{}'.",
                    error.character.escape_debug())
        },
        LexErrorKind::LiteralTooLarge => {
            format!("Error at column {column}: Integer literal is too large.")
        },
    }
}
