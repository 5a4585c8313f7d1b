//! # Storage Layer
//!
//! This module defines the storage abstraction for tagger. The [`TagStore`]
//! trait is everything the filter engine needs from a persistence backend.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the filter engine **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON database used by the CLI
//!   - A single document, rewritten after every mutation
//! - [`memory::InMemoryStore`]: In-memory storage for testing and embedding
//!
//! ## Contract
//!
//! - Reads take `&self`, mutations take `&mut self`.
//! - A file's tag set holds at most one tag per name. [`TagStore::update_tag`]
//!   replaces any existing tag with the same name, plain or valued.
//! - [`TagStore::get_all_files`] returns files sorted by path and
//!   [`TagStore::get_tags`] returns tags sorted by name.
//! - Unknown files fail with `TaggerError::NoFile`, missing tags with
//!   `TaggerError::NoTag`. Nothing is silently defaulted.
//!
//! ## Matching
//!
//! [`TagStore::get_matching_files`] is provided in terms of the other reads. It
//! walks files in `get_all_files` order and stops at the first failed tag
//! fetch. A backend may override it as long as results are identical.
//! [`TagStore::get_file_listing`] follows the same rule for `get_added_at`.
//! Backends that pay per read (like [`fs::FileStore`]) override both to work
//! from a single snapshot.

use crate::error::Result;
use crate::filter::Filter;
use crate::model::{File, Tag};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for file and tag storage.
pub trait TagStore {
    /// Get a file by id
    fn get_file(&self, id: &Uuid) -> Result<File>;

    /// Get the file registered at `path`
    fn get_file_for_path(&self, path: &str) -> Result<File>;

    /// All registered files, sorted by path
    fn get_all_files(&self) -> Result<Vec<File>>;

    /// Tags on `file`, sorted by name
    fn get_tags(&self, file: &File) -> Result<Vec<Tag>>;

    /// Insert or replace the tag with `tag`'s name on `file`
    fn update_tag(&mut self, file: &File, tag: &Tag) -> Result<()>;

    /// Remove the tag with `tag`'s name from `file`. The value is ignored.
    fn remove_tag(&mut self, file: &File, tag: &Tag) -> Result<()>;

    /// Insert or update the file record and replace its whole tag set
    fn update_file(&mut self, file: &File, tags: &[Tag]) -> Result<()>;

    /// Remove the file record together with its tags
    fn remove_file(&mut self, file: &File) -> Result<()>;

    /// When `file` was first registered, if the backend records it.
    fn get_added_at(&self, file: &File) -> Result<Option<DateTime<Utc>>> {
        self.get_file(&file.id())?;
        Ok(None)
    }

    /// Every file with its registration time, in `get_all_files` order.
    fn get_file_listing(&self) -> Result<Vec<(File, Option<DateTime<Utc>>)>> {
        self.get_all_files()?
            .into_iter()
            .map(|file| {
                let added_at = self.get_added_at(&file)?;
                Ok((file, added_at))
            })
            .collect()
    }

    /// Files whose tags satisfy `filter`, in `get_all_files` order.
    fn get_matching_files(&self, filter: &Filter) -> Result<Vec<File>> {
        let files = self.get_all_files()?;
        let total = files.len();
        let mut matched = Vec::new();

        for file in files {
            let tags = self.get_tags(&file)?;
            if filter.matches(&tags) {
                matched.push(file);
            }
        }

        debug!(filter = %filter, total, matched = matched.len(), "matched files");
        Ok(matched)
    }
}

/// Collapses `tags` to one entry per name, keeping the last, sorted by name.
pub(crate) fn normalize_tags(tags: &[Tag]) -> Vec<Tag> {
    let mut by_name = std::collections::BTreeMap::new();
    for tag in tags {
        by_name.insert(tag.name().to_string(), tag.clone());
    }
    by_name.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::StoreFixture;
    use super::*;
    use crate::error::TaggerError;
    use crate::filter::parse;

    /// Delegates to an in-memory store but fails `get_tags` for one path.
    struct FailingTags {
        inner: memory::InMemoryStore,
        poisoned: String,
        fetches: std::cell::Cell<usize>,
    }

    impl TagStore for FailingTags {
        fn get_file(&self, id: &Uuid) -> Result<File> {
            self.inner.get_file(id)
        }

        fn get_file_for_path(&self, path: &str) -> Result<File> {
            self.inner.get_file_for_path(path)
        }

        fn get_all_files(&self) -> Result<Vec<File>> {
            self.inner.get_all_files()
        }

        fn get_tags(&self, file: &File) -> Result<Vec<Tag>> {
            self.fetches.set(self.fetches.get() + 1);
            if file.path() == self.poisoned {
                return Err(TaggerError::Store("tag table unreadable".into()));
            }
            self.inner.get_tags(file)
        }

        fn update_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
            self.inner.update_tag(file, tag)
        }

        fn remove_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
            self.inner.remove_tag(file, tag)
        }

        fn update_file(&mut self, file: &File, tags: &[Tag]) -> Result<()> {
            self.inner.update_file(file, tags)
        }

        fn remove_file(&mut self, file: &File) -> Result<()> {
            self.inner.remove_file(file)
        }
    }

    #[test]
    fn matching_preserves_path_order() {
        let fixture = StoreFixture::new()
            .with_file("/c", &[("keep", None)])
            .with_file("/a", &[("keep", None)])
            .with_file("/b", &[("drop", None)]);

        let filter = parse("keep").unwrap();
        let paths: Vec<String> = fixture
            .store
            .get_matching_files(&filter)
            .unwrap()
            .iter()
            .map(|f| f.path().to_string())
            .collect();
        assert_eq!(paths, vec!["/a", "/c"]);
    }

    #[test]
    fn matching_fails_fast_on_tag_fetch_error() {
        let fixture = StoreFixture::new()
            .with_file("/a", &[("x", None)])
            .with_file("/b", &[("x", None)])
            .with_file("/c", &[("x", None)]);
        let store = FailingTags {
            inner: fixture.store,
            poisoned: "/b".into(),
            fetches: std::cell::Cell::new(0),
        };

        let result = store.get_matching_files(&parse("x").unwrap());
        assert!(matches!(result, Err(TaggerError::Store(_))));
        assert_eq!(store.fetches.get(), 2);
    }

    #[test]
    fn normalize_keeps_last_tag_per_name() {
        let tags = vec![
            Tag::valued("b", 1).unwrap(),
            Tag::plain("a").unwrap(),
            Tag::plain("b").unwrap(),
        ];
        assert_eq!(
            normalize_tags(&tags),
            vec![Tag::plain("a").unwrap(), Tag::plain("b").unwrap()]
        );
    }
}
