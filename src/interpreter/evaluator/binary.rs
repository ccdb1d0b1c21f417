use crate::{
    ast::BinaryOperator,
    error::{EvaluationError, EvaluationErrorKind},
    interpreter::evaluator::core::{Context, DivisionMode, EvalResult},
    util::num::{floor_div, trunc_div},
};

impl Context {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// All arithmetic is checked. Division by zero is detected before the
    /// division is attempted.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - [`EvaluationErrorKind::DivisionByZero`] if `op` is `Div` and `right`
    ///   is `0`.
    /// - [`EvaluationErrorKind::Overflow`] if the result does not fit in an
    ///   `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::{Context, DivisionMode},
    /// };
    ///
    /// let floor = Context::new();
    /// let truncate = Context::with_division(DivisionMode::Truncate);
    ///
    /// assert_eq!(floor.eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-4));
    /// assert_eq!(truncate.eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-3));
    /// assert!(floor.eval_binary(BinaryOperator::Div, 4, 0, 0).is_err());
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    tracing::debug!("division by zero at {position}");
                    return Err(EvaluationError { kind: EvaluationErrorKind::DivisionByZero,
                                                 position });
                }
                match self.division {
                    DivisionMode::Floor => floor_div(left, right),
                    DivisionMode::Truncate => trunc_div(left, right),
                }
            },
        };

        result.ok_or_else(|| {
                  tracing::debug!("overflow computing {left} {op} {right}");
                  EvaluationError { kind: EvaluationErrorKind::Overflow,
                                    position }
              })
    }
}
