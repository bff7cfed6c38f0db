use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the evaluated expression.
pub enum EvaluationError {
    /// A run of digits and `.` characters is not a valid number.
    #[error("Error at position {position}: Invalid number literal '{literal}'.")]
    NumberFormat {
        /// The offending literal text.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// A character outside the expression alphabet was found.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// The right operand of a division is exactly zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// The expression is not well formed: an operator lacks an operand,
    /// parentheses do not match, or there is nothing to evaluate.
    #[error("Error at position {position}: Malformed expression: {details}.")]
    MalformedExpression {
        /// What was wrong.
        details:  &'static str,
        /// Position of the token that exposed the problem.
        position: usize,
    },
    /// An operand follows another operand with no operator between them.
    #[error("Error at position {position}: Missing operator before this operand.")]
    IncompleteExpression {
        /// Where the operand without an operator starts.
        position: usize,
    },
    /// The result overflowed to infinity or is not a number.
    #[error("Result is not a finite number.")]
    NotFinite,
}
