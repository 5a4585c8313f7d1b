use crate::config::TaggerConfig;
use crate::error::{Result, TaggerError};
use crate::model::{File, Tag};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

pub mod add;
pub mod config;
pub mod files;
pub mod get;
pub mod helpers;
pub mod matching;
pub mod move_file;
pub mod remove;
pub mod tagging;

/// Prefix marking a selector argument as a file identifier rather than a path.
pub const UUID_PREFIX: &str = "uuid:";

/// Where configuration lives, for commands that read or write it.
#[derive(Debug, Clone)]
pub struct TaggerPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A file as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub file: File,
    pub added_at: Option<DateTime<Utc>>,
}

impl From<File> for ListedFile {
    fn from(file: File) -> Self {
        Self {
            file,
            added_at: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_files: Vec<File>,
    pub listed_files: Vec<ListedFile>,
    pub tags: Vec<Tag>,
    pub config: Option<TaggerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_files(mut self, files: Vec<File>) -> Self {
        self.affected_files = files;
        self
    }

    pub fn with_listed_files(mut self, files: Vec<ListedFile>) -> Self {
        self.listed_files = files;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: TaggerConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// How a command argument names a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    Id(Uuid),
    Path(String),
}

impl FileSelector {
    /// `uuid:<id>` selects by identifier, anything else is a path.
    pub fn parse(input: &str) -> Result<Self> {
        match input.strip_prefix(UUID_PREFIX) {
            Some(raw) => Uuid::parse_str(raw)
                .map(FileSelector::Id)
                .map_err(|_| TaggerError::InvalidFileId(raw.to_string())),
            None => Ok(FileSelector::Path(input.to_string())),
        }
    }
}

impl std::fmt::Display for FileSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSelector::Id(id) => write!(f, "{}{}", UUID_PREFIX, id),
            FileSelector::Path(path) => write!(f, "{}", path),
        }
    }
}
