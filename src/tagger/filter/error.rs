//! Errors raised while turning filter text into a [`super::Filter`].
//!
//! Positions are byte offsets into the filter text. End of input is reported
//! at `text.len()`.

use super::lexer::TokenKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("filter nests deeper than {limit} groups at position {position}")]
    TooDeep { position: usize, limit: usize },
}

impl FilterError {
    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            FilterError::Lex(err) => err.position,
            FilterError::Parse(err) => err.position,
            FilterError::TooDeep { position, .. } => *position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} at position {position}")]
pub struct LexError {
    pub position: usize,
    pub reason: LexErrorReason,
}

impl LexError {
    pub fn new(position: usize, reason: LexErrorReason) -> Self {
        Self { position, reason }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorReason {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("malformed integer literal '{0}'")]
    MalformedInteger(String),

    #[error("integer literal '{0}' is out of range")]
    IntegerOutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {} at position {position}, found {found}", describe_expected(.expected))]
pub struct ParseError {
    pub position: usize,
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
}

fn describe_expected(kinds: &[TokenKind]) -> String {
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    match names.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid comparator '{0}'")]
pub struct InvalidComparator(pub String);
