use logos::Logos;

use crate::{error::EvaluationError, interpreter::evaluator::core::EvalResult};

/// Represents a lexical token in an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer:
/// a numeric literal, one of the four arithmetic operators, or a bracket.
/// Runs of plain spaces separate tokens and are skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexicalError)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens: the longest run of digits and `.`, such as
    /// `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Failure raised by the lexer before a position is attached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexicalError {
    /// The input contains a character no token starts with.
    #[default]
    UnexpectedCharacter,
    /// A digit/dot run does not form a valid number.
    InvalidNumber,
}

impl LexicalError {
    /// Attaches the offending slice and its byte offset, producing the public
    /// error type.
    #[must_use]
    pub fn at(self, slice: &str, position: usize) -> EvaluationError {
        match self {
            Self::UnexpectedCharacter => {
                EvaluationError::UnexpectedCharacter { character: slice.chars().next().unwrap_or_default(),
                                                       position }
            },
            Self::InvalidNumber => EvaluationError::NumberFormat { literal: slice.to_string(),
                                                                   position },
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexicalError::InvalidNumber)`: If the run is not a valid numeral,
///   such as `.`, `..` or `1.2.3`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexicalError> {
    lex.slice().parse().map_err(|_| LexicalError::InvalidNumber)
}

/// A single-pass token stream over an expression.
///
/// Each item is a token paired with the byte offset where it starts. The
/// stream is consumed once, left to right; numeric literals are read in full
/// before they are yielded.
///
/// # Example
/// ```
/// use pastel_calc::interpreter::lexer::{Scanner, Token};
///
/// let tokens: Vec<_> = Scanner::new("1.5 * (2)").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.5), 0),
///                 (Token::Star, 4),
///                 (Token::LParen, 6),
///                 (Token::Number(2.0), 7),
///                 (Token::RParen, 8)]);
/// ```
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source) }
    }
}

impl Iterator for Scanner<'_> {
    type Item = EvalResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let position = self.lexer.span().start;
        Some(token.map(|token| (token, position))
                  .map_err(|error| error.at(self.lexer.slice(), position)))
    }
}
