//! Tag name validation for tagger.
//!
//! Valid tags:
//! - Contain no whitespace, parentheses, or comparison characters (`= ! < >`)
//! - Are not the connective keywords `AND` / `OR`
//! - Do not start with `-` and are not integer literals

use crate::filter::lexer::{is_word_char, KEYWORD_AND, KEYWORD_OR};

/// Validates a tag name so it can later be named in a filter expression.
///
/// # Examples
/// ```
/// use tagger::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("status").is_ok());
/// assert!(validate_tag_name("year-2024").is_ok());
/// assert!(validate_tag_name("3d").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("a b").is_err());
/// assert!(validate_tag_name("AND").is_err());
/// assert!(validate_tag_name("42").is_err());
/// assert!(validate_tag_name("-x").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    let Some(first_char) = name.chars().next() else {
        return Err(TagValidationError::Empty);
    };

    if let Some(ch) = name.chars().find(|ch| !is_word_char(*ch)) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    if name == KEYWORD_AND || name == KEYWORD_OR {
        return Err(TagValidationError::Keyword(name.to_string()));
    }

    if first_char == '-' {
        return Err(TagValidationError::LeadingHyphen);
    }

    if name.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(TagValidationError::Numeric);
    }

    Ok(())
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains whitespace, a parenthesis, or an operator character
    InvalidCharacter(char),
    /// Tag name is a filter keyword
    Keyword(String),
    /// Tag name starts with a hyphen and would lex as a number
    LeadingHyphen,
    /// Tag name is an integer literal
    Numeric,
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag name cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "tag name contains invalid character {:?} (whitespace, parentheses and = ! < > are reserved)",
                    ch
                )
            }
            TagValidationError::Keyword(word) => {
                write!(f, "tag name cannot be the keyword '{}'", word)
            }
            TagValidationError::LeadingHyphen => {
                write!(f, "tag name cannot start with a hyphen")
            }
            TagValidationError::Numeric => write!(f, "tag name cannot be a number"),
        }
    }
}

impl std::error::Error for TagValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_simple_tags() {
        assert!(validate_tag_name("foo").is_ok());
        assert!(validate_tag_name("status").is_ok());
        assert!(validate_tag_name("and").is_ok());
    }

    #[test]
    fn test_valid_tags_with_punctuation() {
        assert!(validate_tag_name("foo-bar").is_ok());
        assert!(validate_tag_name("foo_bar").is_ok());
        assert!(validate_tag_name("a.b:c").is_ok());
        assert!(validate_tag_name("café").is_ok());
    }

    #[test]
    fn test_valid_tags_starting_with_digit() {
        assert!(validate_tag_name("2024-report").is_ok());
        assert!(validate_tag_name("3d").is_ok());
    }

    #[test]
    fn test_invalid_empty() {
        assert_eq!(validate_tag_name(""), Err(TagValidationError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_tag_name("foo bar"),
            Err(TagValidationError::InvalidCharacter(' '))
        );
        assert_eq!(
            validate_tag_name("a=b"),
            Err(TagValidationError::InvalidCharacter('='))
        );
        assert_eq!(
            validate_tag_name("x!"),
            Err(TagValidationError::InvalidCharacter('!'))
        );
        assert_eq!(
            validate_tag_name("(x)"),
            Err(TagValidationError::InvalidCharacter('('))
        );
        assert_eq!(
            validate_tag_name("a<b"),
            Err(TagValidationError::InvalidCharacter('<'))
        );
    }

    #[test]
    fn test_invalid_keywords() {
        assert_eq!(
            validate_tag_name("AND"),
            Err(TagValidationError::Keyword("AND".to_string()))
        );
        assert_eq!(
            validate_tag_name("OR"),
            Err(TagValidationError::Keyword("OR".to_string()))
        );
    }

    #[test]
    fn test_invalid_numeric() {
        assert_eq!(validate_tag_name("42"), Err(TagValidationError::Numeric));
        assert_eq!(
            validate_tag_name("-5"),
            Err(TagValidationError::LeadingHyphen)
        );
        assert_eq!(
            validate_tag_name("-draft"),
            Err(TagValidationError::LeadingHyphen)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TagValidationError::Empty.to_string(),
            "tag name cannot be empty"
        );
        assert_eq!(
            TagValidationError::Keyword("OR".into()).to_string(),
            "tag name cannot be the keyword 'OR'"
        );
        assert_eq!(
            TagValidationError::Numeric.to_string(),
            "tag name cannot be a number"
        );
    }
}
