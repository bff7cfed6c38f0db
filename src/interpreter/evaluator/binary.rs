use tracing::trace;

use crate::{
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::BinaryOperator,
};

impl Evaluator {
    /// Applies `op` to the two topmost values and pushes the result.
    ///
    /// The value pushed last is the right operand, the one below it the left
    /// operand, so `a - b` is computed from a stack holding `[.., a, b]`.
    ///
    /// # Parameters
    /// - `op`: The operator to apply.
    /// - `position`: Source offset of the operator, used for error reporting.
    ///
    /// # Errors
    /// - `MalformedExpression` if fewer than two values are available.
    /// - `DivisionByZero` if `op` is `/` and the right operand is exactly zero.
    pub(crate) fn apply(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.values.pop(), self.values.pop()) else {
            return Err(EvaluationError::MalformedExpression { details: "operator is missing an operand",
                                                              position });
        };
        let result = Self::eval_scalar_op(op, left, right, position)?;
        trace!(%op, left, right, result, "applied operator");
        self.values.push(result);
        Ok(())
    }

    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division checks its right operand for exact equality with zero; there
    /// is no epsilon tolerance.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset of the operator.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use pastel_calc::{
    ///     error::EvaluationError, interpreter::evaluator::core::Evaluator,
    ///     operator::BinaryOperator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Sub, 7.0, 2.5, 1), Ok(4.5));
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, 1),
    ///            Err(EvaluationError::DivisionByZero { position: 1 }));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          position: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
               Add => left + right,
               Sub => left - right,
               Mul => left * right,
               Div => {
                   if right == 0.0 {
                       return Err(EvaluationError::DivisionByZero { position });
                   }
                   left / right
               },
           })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_operand_is_the_last_pushed() {
        let mut evaluator = Evaluator::default();
        evaluator.values.extend([10.0, 4.0]);
        evaluator.apply(BinaryOperator::Sub, 0).unwrap();
        assert_eq!(evaluator.values, vec![6.0]);

        evaluator.values.push(3.0);
        evaluator.apply(BinaryOperator::Div, 0).unwrap();
        assert_eq!(evaluator.values, vec![2.0]);
    }

    #[test]
    fn missing_operand_is_malformed() {
        let mut evaluator = Evaluator::default();
        evaluator.values.push(1.0);
        assert!(matches!(evaluator.apply(BinaryOperator::Add, 3),
                         Err(EvaluationError::MalformedExpression { position: 3, .. })));
    }

    #[test]
    fn negative_zero_divisor_is_still_zero() {
        assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, 5.0, -0.0, 2),
                   Err(EvaluationError::DivisionByZero { position: 2 }));
    }

    #[test]
    fn tiny_divisor_is_not_zero() {
        assert!(Evaluator::eval_scalar_op(BinaryOperator::Div, 1.0, 1e-300, 0).is_ok());
    }
}
