/// What went wrong while computing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationErrorKind {
    /// The right operand of `/` evaluated to `0`.
    DivisionByZero,
    /// The result does not fit in an `i64`.
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
#[error("{}", describe(self))]
pub struct EvaluationError {
    /// The failure category.
    pub kind:     EvaluationErrorKind,
    /// Byte offset of the operator whose application failed.
    pub position: usize,
}

fn describe(error: &EvaluationError) -> String {
    let column = error.position + 1;
    match error.kind {
        EvaluationErrorKind::DivisionByZero => {
            format!("Error at column {column}: Division by zero.")
        },
        EvaluationErrorKind::Overflow => {
            format!("Error at column {column}: Integer overflow while trying to compute result.")
        },
    }
}
