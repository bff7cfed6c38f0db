/// The evaluator module resolves a token stream into a number.
///
/// The evaluator runs a two-stack shunting-yard pass over the tokens: one
/// stack for operands and intermediate results, one for brackets and deferred
/// operators. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Applies `+ - * /` with standard precedence and left associativity.
/// - Resolves parenthesized groups before combining them with outer
///   operators.
/// - Reports division by zero, missing operands, unbalanced parentheses and
///   leftover operands.
pub mod evaluator;
/// The lexer module tokenizes expression text for the evaluator.
///
/// The lexer reads the raw expression and produces a lazy stream of tokens:
/// numeric literals, arithmetic operators and brackets, each with its source
/// offset. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts digit/dot runs into numbers, reporting malformed literals.
/// - Skips plain spaces.
/// - Reports characters that are not part of the expression alphabet.
pub mod lexer;
