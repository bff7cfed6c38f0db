/// Core evaluation logic and the evaluation stacks.
///
/// Contains the shunting-yard loop that consumes the token stream, the
/// operator and value stacks, and the `EvalResult` type used throughout the
/// crate.
pub mod core;

/// Binary operator application.
///
/// Pops two operands from the value stack, applies an arithmetic operator and
/// pushes the result, reporting missing operands and division by zero.
pub mod binary;
