//! Tag naming rules for tagger.
//!
//! [`crate::model::Tag`] only insists on a non-empty name. Names that get stored
//! through the command layer must also be reachable from filter syntax, which
//! is what [`validate_tag_name`] checks. See the [`validation`] module.

pub mod validation;

pub use validation::{validate_tag_name, TagValidationError};
