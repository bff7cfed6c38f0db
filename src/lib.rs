//! # pastel-calc
//!
//! pastel-calc is the core of a keypad calculator. It evaluates infix
//! arithmetic expressions with `+ - * /`, parentheses and decimal literals in
//! a single left-to-right pass, and provides a headless input controller that
//! any user interface can drive with key presses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Headless calculator input controller.
///
/// This module owns the expression buffer and turns key presses into buffer
/// edits and evaluation requests. It mirrors what a keypad front end does,
/// without any windowing code.
///
/// # Responsibilities
/// - Defines the keypad layout and the `Key` type.
/// - Appends, deletes and clears characters of the expression buffer.
/// - Evaluates on `=`, replacing the buffer with the result for chained
///   computation, or clearing it and showing an error.
pub mod calculator;
/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression, and while mapping input onto keypad keys. Each
/// error carries the source position of the offending token where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator, keypad).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns expression text into a number.
///
/// This module ties together the lexer and the evaluator: the lexer produces
/// a lazy token stream and the evaluator resolves it with an operand stack and
/// an operator stack.
///
/// # Responsibilities
/// - Coordinates tokenizing and evaluation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Arithmetic operators and their precedence.
pub mod operator;
/// General utilities.
///
/// Formatting helpers shared by the calculator and the command line.
pub mod util;

pub use interpreter::evaluator::core::{EvalResult, evaluate};
