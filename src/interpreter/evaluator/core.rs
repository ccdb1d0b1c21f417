use crate::{
    ast::{BinaryOperator, Expr},
    error::EvaluationError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// How `/` rounds when the exact quotient is not an integer.
///
/// The two policies only differ when the operands have opposite signs and
/// the division is inexact:
///
/// | expression | `Floor` | `Truncate` |
/// |------------|---------|------------|
/// | `7 / 2`    | `3`     | `3`        |
/// | `(0-7) / 2`| `-4`    | `-3`       |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DivisionMode {
    /// Round toward negative infinity. This is the default.
    #[default]
    Floor,
    /// Round toward zero.
    Truncate,
}

/// Stores the evaluation settings.
///
/// A `Context` holds no state that changes during evaluation, so the same
/// context can evaluate any number of expressions and always produces the
/// same result for the same tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// The rounding policy applied by `/`.
    pub division: DivisionMode,
}

impl Context {
    /// Creates a context with floor division.
    #[must_use]
    pub const fn new() -> Self {
        Self { division: DivisionMode::Floor }
    }

    /// Creates a context using the given division policy.
    #[must_use]
    pub const fn with_division(division: DivisionMode) -> Self {
        Self { division }
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// Literals evaluate to themselves. A binary operation evaluates its left
    /// operand, then its right operand, then applies the operator. The walk
    /// keeps its own stack, so the depth of the tree is not limited by the
    /// thread's stack size.
    ///
    /// # Errors
    /// Returns the first [`EvaluationError`] raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use intcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::BinaryOp { op:       BinaryOperator::Mul,
    ///                             left:     Box::new(Expr::Literal { value: 6, position: 0 }),
    ///                             right:    Box::new(Expr::Literal { value: 7, position: 4 }),
    ///                             position: 2, };
    /// assert_eq!(Context::new().eval(&expr), Ok(42));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let mut pending = vec![Step::Visit(expr)];
        let mut values = Vec::new();

        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
                Step::Visit(Expr::BinaryOp { op,
                                             left,
                                             right,
                                             position, }) => {
                    // Popped in reverse: left is visited first.
                    pending.extend([Step::Apply(*op, *position),
                                    Step::Visit(right),
                                    Step::Visit(left)]);
                },
                Step::Apply(op, position) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("every operator is applied after both of its operands");
                    };
                    values.push(self.eval_binary(op, left, right, position)?);
                },
            }
        }

        match values.as_slice() {
            [value] => Ok(*value),
            _ => unreachable!("a tree evaluates to exactly one value"),
        }
    }
}

/// Work remaining in [`Context::eval`].
enum Step<'a> {
    /// Evaluate a sub-tree and push its value.
    Visit(&'a Expr),
    /// Pop two values and push the result of the operator at `position`.
    Apply(BinaryOperator, usize),
}
