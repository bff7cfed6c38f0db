use tracing::debug;

use crate::{
    error::EvaluationError,
    interpreter::lexer::{Scanner, Token},
    operator::BinaryOperator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pending {
    /// An open `(` waiting for its `)`.
    Group {
        /// Source offset of the `(`.
        position: usize,
    },
    /// An operator whose right operand has not been resolved yet.
    Operator {
        /// The deferred operator.
        op:       BinaryOperator,
        /// Source offset of the operator.
        position: usize,
    },
}

/// Holds the two stacks of a single evaluation.
///
/// ## Usage
///
/// An `Evaluator` is created fresh for every expression and consumed by
/// [`Evaluator::run`], so no state survives from one evaluation to the next.
/// Most callers want [`evaluate`] instead.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Operands and intermediate results.
    pub(crate) values:    Vec<f64>,
    /// Brackets and operators not yet applied.
    pub(crate) operators: Vec<Pending>,
}

impl Evaluator {
    /// Scans and evaluates `source` in a single left-to-right pass.
    ///
    /// Numbers go to the value stack. An operator first resolves every
    /// pending operator of greater or equal precedence down to the nearest
    /// open bracket, then waits on the operator stack. A `)` resolves
    /// everything back to its matching `(`. Whatever is left is resolved once
    /// the input is exhausted.
    ///
    /// # Errors
    /// - `NumberFormat` / `UnexpectedCharacter` from the scanner.
    /// - `DivisionByZero` when a divisor is exactly zero.
    /// - `MalformedExpression` for missing operands, unbalanced parentheses
    ///   or empty input.
    /// - `IncompleteExpression` when an operand or `(` directly follows an
    ///   operand.
    ///
    /// Operands and operators must alternate: the value stack always holds
    /// one more operand than there are operators waiting outside an open
    /// group.
    pub fn run(mut self, source: &str) -> EvalResult<f64> {
        let mut expect_operand = true;

        for item in Scanner::new(source) {
            let (token, position) = item?;
            let op = match token {
                Token::Number(_) | Token::LParen if !expect_operand => {
                    return Err(EvaluationError::IncompleteExpression { position });
                },
                Token::Number(value) => {
                    self.values.push(value);
                    expect_operand = false;
                    continue;
                },
                Token::LParen => {
                    self.operators.push(Pending::Group { position });
                    continue;
                },
                _ if expect_operand => {
                    return Err(EvaluationError::MalformedExpression { details: "expected an operand",
                                                                      position });
                },
                Token::RParen => {
                    self.close_group(position)?;
                    continue;
                },
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
            };
            self.push_operator(op, position)?;
            expect_operand = true;
        }

        if expect_operand {
            return Err(EvaluationError::MalformedExpression { details:  "expected an operand",
                                                              position: source.len(), });
        }
        self.drain()?;
        self.finish(source.len())
    }

    /// Resolves operators back to the most recent `(` and discards it.
    fn close_group(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Group { .. }) => return Ok(()),
                Some(Pending::Operator { op, position }) => self.apply(op, position)?,
                None => {
                    return Err(EvaluationError::MalformedExpression { details: "unmatched ')'",
                                                                      position });
                },
            }
        }
    }

    /// Resolves pending operators that bind at least as tightly as `op`,
    /// then defers `op` itself.
    fn push_operator(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator { op: pending, position: at }) = self.operators.last()
              && pending.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.apply(pending, at)?;
        }
        self.operators.push(Pending::Operator { op, position });
        Ok(())
    }

    /// Applies every operator still on the stack, innermost first.
    fn drain(&mut self) -> EvalResult<()> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, position } => self.apply(op, position)?,
                Pending::Group { position } => {
                    return Err(EvaluationError::MalformedExpression { details: "unmatched '('",
                                                                      position });
                },
            }
        }
        Ok(())
    }

    /// Takes the sole remaining value as the result.
    ///
    /// Alternation checks in `run` leave exactly one value on success; the
    /// other arms only guard the invariant.
    fn finish(self, end: usize) -> EvalResult<f64> {
        match self.values.as_slice() {
            [] => Err(EvaluationError::MalformedExpression { details:  "nothing to evaluate",
                                                             position: end, }),
            [result] => Ok(*result),
            _ => Err(EvaluationError::IncompleteExpression { position: end }),
        }
    }
}

/// Evaluates an infix arithmetic expression.
///
/// Supports `+ - * /` with the usual precedence, left associativity,
/// parentheses and decimal literals. Plain spaces are ignored.
///
/// # Errors
/// Returns an [`EvaluationError`] for malformed input or division by zero.
///
/// # Example
/// ```
/// use pastel_calc::{error::EvaluationError, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
/// assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero { position: 1 }));
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    debug!(source, "evaluating expression");
    let result = Evaluator::default().run(source);
    match &result {
        Ok(value) => debug!(value, "evaluation succeeded"),
        Err(error) => debug!(%error, "evaluation failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_precedence_resolves_left_to_right() {
        assert_eq!(evaluate("8-3-2"), Ok(3.0));
        assert_eq!(evaluate("16/4/2"), Ok(2.0));
        assert_eq!(evaluate("2*6/3"), Ok(4.0));
    }

    #[test]
    fn brackets_stop_the_unwind() {
        assert_eq!(evaluate("2*(3+4)"), Ok(14.0));
        assert_eq!(evaluate("10-(2-1)"), Ok(9.0));
    }

    #[test]
    fn unmatched_brackets_are_malformed() {
        assert_eq!(evaluate("1+2)"),
                   Err(EvaluationError::MalformedExpression { details:  "unmatched ')'",
                                                              position: 3, }));
        assert_eq!(evaluate("(1+2"),
                   Err(EvaluationError::MalformedExpression { details:  "unmatched '('",
                                                              position: 0, }));
    }

    #[test]
    fn adjacent_operands_are_incomplete() {
        assert_eq!(evaluate("2 3"),
                   Err(EvaluationError::IncompleteExpression { position: 2 }));
        assert_eq!(evaluate("(1)(2)(3)"),
                   Err(EvaluationError::IncompleteExpression { position: 3 }));
        assert_eq!(evaluate("2(3)*"),
                   Err(EvaluationError::IncompleteExpression { position: 1 }));
    }

    #[test]
    fn adjacent_operands_cannot_borrow_an_operator() {
        assert_eq!(evaluate("2 3+"),
                   Err(EvaluationError::IncompleteExpression { position: 2 }));
        assert_eq!(evaluate("1 2+3*"),
                   Err(EvaluationError::IncompleteExpression { position: 2 }));
        assert_eq!(evaluate("+1 2"),
                   Err(EvaluationError::MalformedExpression { details:  "expected an operand",
                                                              position: 0, }));
    }

    #[test]
    fn empty_group_is_malformed() {
        assert!(matches!(evaluate("()"),
                         Err(EvaluationError::MalformedExpression { position: 1, .. })));
    }

    #[test]
    fn trailing_operator_is_malformed() {
        assert_eq!(evaluate("4*"),
                   Err(EvaluationError::MalformedExpression { details:  "expected an operand",
                                                              position: 2, }));
    }

    #[test]
    fn stacks_are_empty_after_a_group_closes() {
        let mut evaluator = Evaluator::default();
        evaluator.operators.push(Pending::Group { position: 0 });
        evaluator.values.extend([1.0, 2.0]);
        evaluator.operators.push(Pending::Operator { op:       BinaryOperator::Add,
                                                     position: 2, });
        evaluator.close_group(4).unwrap();
        assert!(evaluator.operators.is_empty());
        assert_eq!(evaluator.values, vec![3.0]);
    }
}
