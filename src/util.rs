/// Numeric formatting helpers.
///
/// Renders evaluation results as text that the evaluator reads back as the
/// exact same value, so a result can seed the next expression.
pub mod num;
