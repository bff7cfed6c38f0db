/// Evaluation errors.
///
/// Defines every failure that can be raised while scanning or evaluating an
/// expression: malformed numeric literals, unexpected characters, division by
/// zero, missing operands and leftover operands.
pub mod eval_error;
/// Keypad errors.
///
/// Raised when a key label or character does not correspond to any key on
/// the calculator keypad.
pub mod key_error;

pub use eval_error::EvaluationError;
pub use key_error::KeyError;
