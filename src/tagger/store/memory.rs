use super::{normalize_tags, TagStore};
use crate::error::{Result, TaggerError};
use crate::model::{File, Tag};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Record {
    path: String,
    added_at: DateTime<Utc>,
    tags: BTreeMap<String, Tag>,
}

/// Volatile store backed by ordered maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    files: BTreeMap<Uuid, Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, file: &File) -> Result<&Record> {
        self.files
            .get(&file.id())
            .ok_or_else(|| TaggerError::NoFile(file.id().to_string()))
    }

    fn record_mut(&mut self, file: &File) -> Result<&mut Record> {
        self.files
            .get_mut(&file.id())
            .ok_or_else(|| TaggerError::NoFile(file.id().to_string()))
    }

    fn owner_of(&self, path: &str) -> Option<Uuid> {
        self.files
            .iter()
            .find(|(_, record)| record.path == path)
            .map(|(id, _)| *id)
    }
}

impl TagStore for InMemoryStore {
    fn get_file(&self, id: &Uuid) -> Result<File> {
        self.files
            .get(id)
            .map(|record| File::new(*id, record.path.clone()))
            .ok_or_else(|| TaggerError::NoFile(id.to_string()))
    }

    fn get_file_for_path(&self, path: &str) -> Result<File> {
        self.owner_of(path)
            .map(|id| File::new(id, path))
            .ok_or_else(|| TaggerError::NoFile(path.to_string()))
    }

    fn get_all_files(&self) -> Result<Vec<File>> {
        let mut files: Vec<File> = self
            .files
            .iter()
            .map(|(id, record)| File::new(*id, record.path.clone()))
            .collect();
        files.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(files)
    }

    fn get_tags(&self, file: &File) -> Result<Vec<Tag>> {
        Ok(self.record(file)?.tags.values().cloned().collect())
    }

    fn update_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
        let record = self.record_mut(file)?;
        record.tags.insert(tag.name().to_string(), tag.clone());
        debug!(file = %file.id(), tag = %tag, "tag updated");
        Ok(())
    }

    fn remove_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
        let record = self.record_mut(file)?;
        if record.tags.remove(tag.name()).is_none() {
            return Err(TaggerError::NoTag(tag.name().to_string()));
        }
        debug!(file = %file.id(), tag = tag.name(), "tag removed");
        Ok(())
    }

    fn update_file(&mut self, file: &File, tags: &[Tag]) -> Result<()> {
        if let Some(owner) = self.owner_of(file.path()) {
            if owner != file.id() {
                return Err(TaggerError::PathInUse {
                    path: file.path().to_string(),
                    id: owner,
                });
            }
        }

        let added_at = self
            .files
            .get(&file.id())
            .map(|record| record.added_at)
            .unwrap_or_else(Utc::now);
        let tags = normalize_tags(tags)
            .into_iter()
            .map(|tag| (tag.name().to_string(), tag))
            .collect();
        self.files.insert(
            file.id(),
            Record {
                path: file.path().to_string(),
                added_at,
                tags,
            },
        );
        debug!(file = %file.id(), path = file.path(), "file updated");
        Ok(())
    }

    fn get_added_at(&self, file: &File) -> Result<Option<DateTime<Utc>>> {
        Ok(Some(self.record(file)?.added_at))
    }

    fn remove_file(&mut self, file: &File) -> Result<()> {
        if self.files.remove(&file.id()).is_none() {
            return Err(TaggerError::NoFile(file.id().to_string()));
        }
        debug!(file = %file.id(), "file removed");
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Registers `path` with the given `(name, value)` tags.
        pub fn with_file(mut self, path: &str, tags: &[(&str, Option<i64>)]) -> Self {
            let tags: Vec<Tag> = tags
                .iter()
                .map(|(name, value)| match value {
                    Some(value) => Tag::valued(*name, *value).unwrap(),
                    None => Tag::plain(*name).unwrap(),
                })
                .collect();
            self.store
                .update_file(&File::register(path), &tags)
                .unwrap();
            self
        }

        /// Registers `count` untagged files named `/files/file-N`.
        pub fn with_files(mut self, count: usize) -> Self {
            for i in 0..count {
                let path = format!("/files/file-{}", i + 1);
                self = self.with_file(&path, &[]);
            }
            self
        }

        pub fn file(&self, path: &str) -> File {
            self.store.get_file_for_path(path).unwrap()
        }
    }
}
