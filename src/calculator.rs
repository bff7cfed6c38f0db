use std::str::FromStr;

use tracing::{info, warn};

use crate::{
    error::{EvaluationError, KeyError},
    interpreter::evaluator::core::evaluate,
    util::num::buffer_text,
};

/// Key labels of the calculator keypad, row by row on a 5 x 4 grid.
pub const KEYPAD: [&str; 20] = ["C", "⌫", "(", ")", //
                                "7", "8", "9", "/", //
                                "4", "5", "6", "*", //
                                "1", "2", "3", "-", //
                                "0", ".", "=", "+"];

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Appends a digit, `.`, an operator or a bracket to the expression.
    Input(char),
    /// `C`: empties the expression.
    Clear,
    /// `⌫`: removes the last character of the expression.
    Backspace,
    /// `=`: evaluates the expression.
    Equals,
}

impl TryFrom<char> for Key {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' => Ok(Self::Input(c)),
            'C' => Ok(Self::Clear),
            '⌫' => Ok(Self::Backspace),
            '=' => Ok(Self::Equals),
            _ => Err(KeyError::UnknownKey { label: c.to_string() }),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parses a keypad label such as `"7"`, `"⌫"` or `"="`.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(KeyError::UnknownKey { label: label.to_string() }),
        }
    }
}

/// What the calculator display shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The expression typed so far.
    Input(String),
    /// The outcome of the last successful evaluation.
    Result {
        /// The expression as it was evaluated.
        expression: String,
        /// Its value.
        value:      f64,
    },
    /// The last evaluation failed.
    Error,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(text) => write!(f, "{text}"),
            Self::Result { expression, value } => {
                write!(f, "{expression} = {}", buffer_text(*value))
            },
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Drives the expression buffer from key presses.
///
/// After a successful evaluation the buffer holds the textual result, so
/// further keys extend it into a new expression. After a failure the buffer
/// is empty and the display shows a generic error. A result that overflows
/// to infinity or is not a number counts as a failure.
///
/// # Example
/// ```
/// use pastel_calc::calculator::{Calculator, Key};
///
/// let mut calculator = Calculator::new();
/// calculator.type_str("2+3*4").unwrap();
/// assert_eq!(calculator.press(Key::Equals).to_string(), "2+3*4 = 14");
///
/// calculator.type_str("/7=").unwrap();
/// assert_eq!(calculator.buffer(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    buffer:     String,
    screen:     Screen,
    last_error: Option<EvaluationError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with an empty expression and a blank display.
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer:     String::new(),
               screen:     Screen::Input(String::new()),
               last_error: None, }
    }

    /// The expression typed so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The current display contents.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The error behind the most recent `Error` display, if any.
    ///
    /// Only kept for diagnostics; the display never differentiates between
    /// error kinds.
    #[must_use]
    pub const fn last_error(&self) -> Option<&EvaluationError> {
        self.last_error.as_ref()
    }

    /// Handles a single key press and returns the updated display.
    pub fn press(&mut self, key: Key) -> &Screen {
        match key {
            Key::Input(c) => {
                self.buffer.push(c);
                self.echo();
            },
            Key::Clear => {
                self.buffer.clear();
                self.echo();
            },
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    self.echo();
                }
            },
            Key::Equals => self.evaluate(),
        }
        &self.screen
    }

    /// Presses the key for every character of `keys`, in order.
    ///
    /// # Errors
    /// Returns `KeyError::UnknownKey` for the first character that is not a
    /// key. No key is pressed in that case.
    pub fn type_str(&mut self, keys: &str) -> Result<&Screen, KeyError> {
        let keys = keys.chars().map(Key::try_from).collect::<Result<Vec<_>, _>>()?;
        for key in keys {
            self.press(key);
        }
        Ok(&self.screen)
    }

    fn echo(&mut self) {
        self.screen = Screen::Input(self.buffer.clone());
    }

    fn evaluate(&mut self) {
        let expression = std::mem::take(&mut self.buffer);
        let result = evaluate(&expression).and_then(|value| {
                                              if value.is_finite() {
                                                  Ok(value)
                                              } else {
                                                  Err(EvaluationError::NotFinite)
                                              }
                                          });
        match result {
            Ok(value) => {
                info!(%expression, value, "evaluated");
                self.buffer = buffer_text(value);
                self.screen = Screen::Result { expression, value };
                self.last_error = None;
            },
            Err(error) => {
                warn!(%expression, %error, "evaluation failed");
                self.screen = Screen::Error;
                self.last_error = Some(error);
            },
        }
    }
}
