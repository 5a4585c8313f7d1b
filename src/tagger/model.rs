use crate::error::{Result, TaggerError};
use std::fmt;
use uuid::Uuid;

/// What [`Tag::value`] reports for a tag that carries no value.
pub const PLAIN_TAG_VALUE: i64 = -1;

/// A tag attached to a file.
///
/// The name is the natural key within a file's tag set: a plain and a valued
/// tag with the same name never coexist on one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Plain { name: String },
    Valued { name: String, value: i64 },
}

impl Tag {
    pub fn plain(name: impl Into<String>) -> Result<Self> {
        let name = non_empty(name.into())?;
        Ok(Tag::Plain { name })
    }

    pub fn valued(name: impl Into<String>, value: i64) -> Result<Self> {
        let name = non_empty(name.into())?;
        Ok(Tag::Valued { name, value })
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Plain { name } | Tag::Valued { name, .. } => name,
        }
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Tag::Valued { .. })
    }

    /// Returns [`PLAIN_TAG_VALUE`] on a plain tag; check [`Tag::has_value`] first.
    pub fn value(&self) -> i64 {
        self.as_value().unwrap_or(PLAIN_TAG_VALUE)
    }

    pub fn as_value(&self) -> Option<i64> {
        match self {
            Tag::Plain { .. } => None,
            Tag::Valued { value, .. } => Some(*value),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Plain { name } => write!(f, "{}", name),
            Tag::Valued { name, value } => write!(f, "{}={}", name, value),
        }
    }
}

fn non_empty(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(TaggerError::EmptyTagName);
    }
    Ok(name)
}

/// A registered file. The id survives renames; the path does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    id: Uuid,
    path: String,
}

impl File {
    pub fn new(id: Uuid, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// A file with a freshly generated identifier.
    pub fn register(path: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), path)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Same identity, new location.
    pub fn moved_to(&self, path: impl Into<String>) -> Self {
        Self::new(self.id, path)
    }
}
