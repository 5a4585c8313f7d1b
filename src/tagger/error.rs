use crate::filter::FilterError;
use crate::tags::TagValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("No such file in storage: {0}")]
    NoFile(String),

    #[error("No such tag on file: {0}")]
    NoTag(String),

    #[error("No matching files in storage")]
    NoMatches,

    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    #[error("Tag name cannot be empty")]
    EmptyTagName,

    #[error("Invalid tag name '{name}': {reason}")]
    InvalidTagName {
        name: String,
        reason: TagValidationError,
    },

    #[error("Path {path} is already registered to file {id}")]
    PathInUse { path: String, id: Uuid },

    #[error("Invalid file id: {0}")]
    InvalidFileId(String),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TaggerError>;
