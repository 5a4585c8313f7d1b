//! Recursive-descent parser for filter text.
//!
//! Each precedence level collects its operands into a `Vec` rather than
//! nesting binary nodes, so a chain of one connective comes out as a single
//! flattened node.

use super::error::{FilterError, ParseError};
use super::lexer::{Lexeme, Lexer, Token, TokenKind};
use super::Filter;
use tracing::debug;

/// Deepest allowed nesting of parenthesised groups.
pub const MAX_DEPTH: usize = 200;

/// Parses a complete filter expression. Trailing tokens are an error.
pub fn parse(input: &str) -> Result<Filter, FilterError> {
    let mut parser = Parser::new(input)?;
    let filter = parser.parse_expr()?;
    parser.expect_end()?;
    debug!(input, filter = %filter, "parsed filter");
    Ok(filter)
}

/// Parses the longest leading expression and returns it along with the byte
/// offset of the first token that was not consumed.
pub fn parse_prefix(input: &str) -> Result<(Filter, usize), FilterError> {
    let mut parser = Parser::new(input)?;
    let filter = parser.parse_expr()?;
    Ok((filter, parser.current.position))
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Lexeme,
    depth: usize,
    // A bare name may still be followed by a comparator.
    after_presence: bool,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, FilterError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_lexeme()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
            after_presence: false,
        })
    }

    fn advance(&mut self) -> Result<Lexeme, FilterError> {
        let next = self.lexer.next_lexeme()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn error(&self, expected: &[TokenKind]) -> FilterError {
        ParseError {
            position: self.current.position,
            expected: expected.to_vec(),
            found: self.current.token.kind(),
        }
        .into()
    }

    /// What may follow a complete operand, plus `closing`.
    fn error_after_operand(&self, closing: TokenKind) -> FilterError {
        let mut expected = Vec::with_capacity(4);
        if self.after_presence {
            expected.push(TokenKind::Comparator);
        }
        expected.extend([TokenKind::And, TokenKind::Or, closing]);
        self.error(&expected)
    }

    fn parse_expr(&mut self) -> Result<Filter, FilterError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Filter, FilterError> {
        let first = self.parse_and()?;
        let mut terms = Vec::new();
        while self.current.token == Token::Or {
            self.advance()?;
            terms.push(self.parse_and()?);
        }
        Ok(join(first, terms, Filter::Or))
    }

    fn parse_and(&mut self) -> Result<Filter, FilterError> {
        let first = self.parse_atom()?;
        let mut atoms = Vec::new();
        while self.current.token == Token::And {
            self.advance()?;
            atoms.push(self.parse_atom()?);
        }
        Ok(join(first, atoms, Filter::And))
    }

    fn parse_atom(&mut self) -> Result<Filter, FilterError> {
        self.after_presence = false;
        match &self.current.token {
            Token::LParen => self.parse_group(),
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                if let Token::Comparator(op) = self.current.token {
                    self.advance()?;
                    let value = self.expect_integer()?;
                    Ok(Filter::Compare { name, op, value })
                } else {
                    self.after_presence = true;
                    Ok(Filter::Name(name))
                }
            }
            _ => Err(self.error(&[TokenKind::Identifier, TokenKind::LParen])),
        }
    }

    fn parse_group(&mut self) -> Result<Filter, FilterError> {
        if self.depth >= MAX_DEPTH {
            return Err(FilterError::TooDeep {
                position: self.current.position,
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        self.advance()?;

        let inner = self.parse_expr()?;
        if self.current.token != Token::RParen {
            return Err(self.error_after_operand(TokenKind::RParen));
        }
        self.advance()?;
        self.depth -= 1;
        self.after_presence = false;
        Ok(inner)
    }

    fn expect_integer(&mut self) -> Result<i64, FilterError> {
        if let Token::Integer(value) = self.current.token {
            self.advance()?;
            Ok(value)
        } else {
            Err(self.error(&[TokenKind::Integer]))
        }
    }

    fn expect_end(&self) -> Result<(), FilterError> {
        if self.current.token == Token::End {
            Ok(())
        } else {
            Err(self.error_after_operand(TokenKind::End))
        }
    }
}

fn join(first: Filter, mut rest: Vec<Filter>, connective: fn(Vec<Filter>) -> Filter) -> Filter {
    if rest.is_empty() {
        return first;
    }
    rest.insert(0, first);
    connective(rest)
}
