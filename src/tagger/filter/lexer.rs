//! Tokenizer for filter text.
//!
//! Words are maximal runs of characters that are neither whitespace, a
//! parenthesis, nor one of the comparison characters `= ! < >`. A word is then
//! classified as a keyword, an integer literal, or an identifier.

use super::error::{LexError, LexErrorReason};
use super::Comparator;
use std::fmt;

pub const KEYWORD_AND: &str = "AND";
pub const KEYWORD_OR: &str = "OR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    Integer(i64),
    Comparator(Comparator),
    And,
    Or,
    LParen,
    RParen,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Integer(_) => TokenKind::Integer,
            Token::Comparator(_) => TokenKind::Comparator,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::End => TokenKind::End,
        }
    }
}

/// Payload-free token category, used when reporting what the parser wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Comparator,
    And,
    Or,
    LParen,
    RParen,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Comparator => "comparator",
            TokenKind::And => KEYWORD_AND,
            TokenKind::Or => KEYWORD_OR,
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::End => "end of input",
        };
        f.write_str(text)
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

impl Lexeme {
    fn new(token: Token, position: usize) -> Self {
        Self { token, position }
    }
}

/// True for characters that may appear inside an identifier or number.
pub fn is_word_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '(' | ')' | '=' | '!' | '<' | '>')
}

/// Lazy tokenizer over filter text.
///
/// As an iterator it yields every token including a single trailing
/// [`Token::End`], then stops. It also stops right after the first error.
/// Cloning or [`Lexer::reset`] restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.finished = false;
    }

    /// Lexes the next token. Once input is exhausted this keeps returning
    /// [`Token::End`].
    pub fn next_lexeme(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(ch) = self.peek_char() else {
            return Ok(Lexeme::new(Token::End, start));
        };

        match ch {
            '(' => {
                self.bump(ch);
                Ok(Lexeme::new(Token::LParen, start))
            }
            ')' => {
                self.bump(ch);
                Ok(Lexeme::new(Token::RParen, start))
            }
            '=' | '!' | '<' | '>' => self.lex_comparator(start, ch),
            _ => self.lex_word(start),
        }
    }

    fn lex_comparator(&mut self, start: usize, first: char) -> Result<Lexeme, LexError> {
        self.bump(first);
        if self.peek_char() == Some('=') {
            self.bump('=');
        }

        let symbol = &self.input[start..self.pos];
        let op = symbol
            .parse::<Comparator>()
            .map_err(|_| LexError::new(start, LexErrorReason::UnexpectedChar(first)))?;
        Ok(Lexeme::new(Token::Comparator(op), start))
    }

    fn lex_word(&mut self, start: usize) -> Result<Lexeme, LexError> {
        while let Some(ch) = self.peek_char() {
            if !is_word_char(ch) {
                break;
            }
            self.bump(ch);
        }

        let word = &self.input[start..self.pos];
        let token = if word == KEYWORD_AND {
            Token::And
        } else if word == KEYWORD_OR {
            Token::Or
        } else if is_integer_literal(word) {
            let value = word.parse::<i64>().map_err(|_| {
                LexError::new(start, LexErrorReason::IntegerOutOfRange(word.to_string()))
            })?;
            Token::Integer(value)
        } else if word.starts_with('-') {
            return Err(LexError::new(
                start,
                LexErrorReason::MalformedInteger(word.to_string()),
            ));
        } else {
            Token::Identifier(word.to_string())
        };

        Ok(Lexeme::new(token, start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump(ch);
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_lexeme();
        if matches!(&item, Ok(Lexeme { token: Token::End, .. }) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}

fn is_integer_literal(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}
