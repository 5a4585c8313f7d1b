//! # Filter Expressions
//!
//! A filter is a boolean expression over a file's tag set:
//!
//! ```text
//! status == 1 AND (draft OR review)
//! ```
//!
//! Text goes through the [`lexer`], then the [`parser`], and comes out as an
//! immutable [`Filter`] tree that is evaluated with [`Filter::matches`].
//!
//! ## Grammar
//!
//! ```text
//! expr       := or_expr
//! or_expr    := and_expr ( "OR" and_expr )*
//! and_expr   := atom ( "AND" atom )*
//! atom       := "(" expr ")" | comparison | presence
//! comparison := IDENT COMPARATOR INTEGER
//! presence   := IDENT
//! ```
//!
//! `AND` binds tighter than `OR`. A run of the same connective at one nesting
//! level becomes a single node: `a AND b AND c` is one `And` with three
//! children. A parenthesised group stays a child of its own.
//!
//! ## Evaluation
//!
//! Name lookups stop at the first tag carrying that name. A comparison against
//! a plain tag is always false; there is no coercion. Tag sets are expected to
//! hold at most one entry per name, which the stores guarantee.
//!
//! ## Rendering
//!
//! `Display` produces a fully bracketed debug form, `(a, (b, c))`, which is not
//! filter syntax and cannot be parsed back.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{FilterError, InvalidComparator, LexError, LexErrorReason, ParseError};
pub use lexer::{Lexeme, Lexer, Token, TokenKind};
pub use parser::{parse, parse_prefix, MAX_DEPTH};

use crate::model::Tag;
use std::fmt;
use std::str::FromStr;

/// Integer comparison operator used by [`Filter::Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparator {
    pub const ALL: [Comparator; 6] = [
        Comparator::Equal,
        Comparator::NotEqual,
        Comparator::LessThan,
        Comparator::GreaterThan,
        Comparator::LessOrEqual,
        Comparator::GreaterOrEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::LessThan => "<",
            Comparator::GreaterThan => ">",
            Comparator::LessOrEqual => "<=",
            Comparator::GreaterOrEqual => ">=",
        }
    }

    /// Evaluates `lhs <op> rhs`.
    pub fn apply(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparator::Equal => lhs == rhs,
            Comparator::NotEqual => lhs != rhs,
            Comparator::LessThan => lhs < rhs,
            Comparator::GreaterThan => lhs > rhs,
            Comparator::LessOrEqual => lhs <= rhs,
            Comparator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl FromStr for Comparator {
    type Err = InvalidComparator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| InvalidComparator(s.to_string()))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// True when any tag has this name, valued or not.
    Name(String),
    /// True when the first tag with `name` is valued and `tag_value <op> value`.
    Compare {
        name: String,
        op: Comparator,
        value: i64,
    },
    /// All children must match. Built with at least two children.
    And(Vec<Filter>),
    /// Any child must match. Built with at least two children.
    Or(Vec<Filter>),
}

impl Filter {
    pub fn name(name: impl Into<String>) -> Self {
        Filter::Name(name.into())
    }

    pub fn compare(name: impl Into<String>, op: Comparator, value: i64) -> Self {
        Filter::Compare {
            name: name.into(),
            op,
            value,
        }
    }

    pub fn matches(&self, tags: &[Tag]) -> bool {
        match self {
            Filter::Name(name) => first_named(tags, name).is_some(),
            Filter::Compare { name, op, value } => match first_named(tags, name) {
                Some(Tag::Valued { value: actual, .. }) => op.apply(*actual, *value),
                Some(Tag::Plain { .. }) | None => false,
            },
            Filter::And(children) => children.iter().all(|child| child.matches(tags)),
            Filter::Or(children) => children.iter().any(|child| child.matches(tags)),
        }
    }
}

fn first_named<'t>(tags: &'t [Tag], name: &str) -> Option<&'t Tag> {
    tags.iter().find(|tag| tag.name() == name)
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Name(name) => f.write_str(name),
            Filter::Compare { name, op, value } => write!(f, "{} {} {}", name, op, value),
            Filter::And(children) | Filter::Or(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str) -> Tag {
        Tag::plain(name).unwrap()
    }

    fn valued(name: &str, value: i64) -> Tag {
        Tag::valued(name, value).unwrap()
    }

    #[test]
    fn comparator_parses_exactly_six_symbols() {
        for op in Comparator::ALL {
            assert_eq!(op.symbol().parse::<Comparator>().unwrap(), op);
        }
        for bad in ["=", "!", "=<", "=>", "<>", "===", ""] {
            assert_eq!(
                bad.parse::<Comparator>(),
                Err(InvalidComparator(bad.to_string()))
            );
        }
    }

    #[test]
    fn each_comparator_against_equal_value() {
        let tags = [valued("v", 5)];
        let expected = [
            (Comparator::Equal, true),
            (Comparator::NotEqual, false),
            (Comparator::LessThan, false),
            (Comparator::GreaterThan, false),
            (Comparator::LessOrEqual, true),
            (Comparator::GreaterOrEqual, true),
        ];
        for (op, result) in expected {
            assert_eq!(
                Filter::compare("v", op, 5).matches(&tags),
                result,
                "v {} 5",
                op
            );
        }
    }

    #[test]
    fn comparators_against_smaller_and_larger_literals() {
        let tags = [valued("v", 5)];
        assert!(Filter::compare("v", Comparator::GreaterThan, 4).matches(&tags));
        assert!(Filter::compare("v", Comparator::LessThan, 6).matches(&tags));
        assert!(Filter::compare("v", Comparator::NotEqual, -5).matches(&tags));
        assert!(!Filter::compare("v", Comparator::GreaterOrEqual, 6).matches(&tags));
    }

    #[test]
    fn presence_ignores_value() {
        assert!(Filter::name("x").matches(&[valued("x", 5)]));
        assert!(Filter::name("x").matches(&[plain("x")]));
        assert!(!Filter::name("x").matches(&[plain("y")]));
        assert!(!Filter::name("x").matches(&[]));
    }

    #[test]
    fn comparison_against_plain_tag_fails() {
        let filter = Filter::compare("x", Comparator::GreaterOrEqual, 1);
        assert!(!filter.matches(&[plain("x")]));
        assert!(!filter.matches(&[]));
    }

    #[test]
    fn comparison_uses_first_tag_with_name() {
        let filter = Filter::compare("x", Comparator::Equal, 3);
        assert!(!filter.matches(&[plain("x"), valued("x", 3)]));
        assert!(filter.matches(&[valued("x", 3), plain("x")]));
    }

    #[test]
    fn connectives() {
        let tags = [plain("a"), valued("b", 2)];
        let and = Filter::And(vec![Filter::name("a"), Filter::name("b")]);
        let and_missing = Filter::And(vec![Filter::name("a"), Filter::name("c")]);
        let or = Filter::Or(vec![Filter::name("c"), Filter::name("b")]);
        let or_missing = Filter::Or(vec![Filter::name("c"), Filter::name("d")]);

        assert!(and.matches(&tags));
        assert!(!and_missing.matches(&tags));
        assert!(or.matches(&tags));
        assert!(!or_missing.matches(&tags));
    }

    #[test]
    fn renders_bracketed_form() {
        let filter = Filter::Or(vec![
            Filter::And(vec![
                Filter::compare("status", Comparator::Equal, 1),
                Filter::name("a"),
            ]),
            Filter::compare("n", Comparator::LessOrEqual, -2),
        ]);
        assert_eq!(filter.to_string(), "((status == 1, a), n <= -2)");
    }

    #[test]
    fn filters_evaluate_across_threads() {
        let filter = parse("role == 1 OR status").unwrap();
        let sets = [
            vec![valued("role", 1)],
            vec![plain("status")],
            vec![valued("role", 2)],
        ];

        let filter = &filter;
        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = sets
                .iter()
                .map(|tags| scope.spawn(move || filter.matches(tags)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, vec![true, true, false]);
    }
}
