use super::{normalize_tags, TagStore};
use crate::error::{Result, TaggerError};
use crate::filter::Filter;
use crate::model::{File, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// On-disk layout of the database document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    files: BTreeMap<Uuid, FileRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileRecord {
    path: String,
    added_at: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<TagRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TagRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl From<&Tag> for TagRecord {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name().to_string(),
            value: tag.as_value(),
        }
    }
}

impl TagRecord {
    fn to_tag(&self) -> Result<Tag> {
        let tag = match self.value {
            Some(value) => Tag::valued(self.name.clone(), value),
            None => Tag::plain(self.name.clone()),
        };
        tag.map_err(|e| TaggerError::Store(format!("corrupt tag record: {}", e)))
    }
}

/// JSON database holding every file and its tags in one document.
///
/// Each operation reads the document from disk once; each mutation writes it
/// back through a temporary file and a rename. A missing document is an empty
/// store. Bulk reads (matching, listing) work from that single snapshot.
pub struct FileStore {
    db_path: PathBuf,
}

impl FileStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn load(&self) -> Result<Database> {
        if !self.db_path.exists() {
            debug!(path = %self.db_path.display(), "no database yet, starting empty");
            return Ok(Database::default());
        }
        let content = fs::read_to_string(&self.db_path).map_err(TaggerError::Io)?;
        let db: Database = serde_json::from_str(&content).map_err(TaggerError::Serialization)?;
        validate(&db)?;
        debug!(path = %self.db_path.display(), files = db.files.len(), "database loaded");
        Ok(db)
    }

    fn save(&self, db: &Database) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TaggerError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(db).map_err(TaggerError::Serialization)?;
        let tmp_path = self.db_path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(TaggerError::Io)?;
        fs::rename(&tmp_path, &self.db_path).map_err(TaggerError::Io)?;
        Ok(())
    }

    fn record<'d>(db: &'d Database, file: &File) -> Result<&'d FileRecord> {
        db.files
            .get(&file.id())
            .ok_or_else(|| TaggerError::NoFile(file.id().to_string()))
    }

    /// Records sorted by path, the order every listing uses.
    fn by_path(db: &Database) -> Vec<(Uuid, &FileRecord)> {
        let mut records: Vec<(Uuid, &FileRecord)> =
            db.files.iter().map(|(id, record)| (*id, record)).collect();
        records.sort_by(|a, b| a.1.path.cmp(&b.1.path));
        records
    }

    fn tags_of(record: &FileRecord) -> Result<Vec<Tag>> {
        let tags = record
            .tags
            .iter()
            .map(TagRecord::to_tag)
            .collect::<Result<Vec<_>>>()?;
        Ok(normalize_tags(&tags))
    }

    fn record_mut<'d>(db: &'d mut Database, file: &File) -> Result<&'d mut FileRecord> {
        db.files
            .get_mut(&file.id())
            .ok_or_else(|| TaggerError::NoFile(file.id().to_string()))
    }
}

fn validate(db: &Database) -> Result<()> {
    let mut seen: BTreeMap<&str, Uuid> = BTreeMap::new();
    for (id, record) in &db.files {
        if let Some(other) = seen.insert(record.path.as_str(), *id) {
            return Err(TaggerError::Store(format!(
                "path {} is registered to both {} and {}",
                record.path, other, id
            )));
        }
        for tag in &record.tags {
            tag.to_tag()?;
        }
    }
    Ok(())
}

impl TagStore for FileStore {
    fn get_file(&self, id: &Uuid) -> Result<File> {
        let db = self.load()?;
        db.files
            .get(id)
            .map(|record| File::new(*id, record.path.clone()))
            .ok_or_else(|| TaggerError::NoFile(id.to_string()))
    }

    fn get_file_for_path(&self, path: &str) -> Result<File> {
        let db = self.load()?;
        db.files
            .iter()
            .find(|(_, record)| record.path == path)
            .map(|(id, _)| File::new(*id, path))
            .ok_or_else(|| TaggerError::NoFile(path.to_string()))
    }

    fn get_all_files(&self) -> Result<Vec<File>> {
        let db = self.load()?;
        Ok(Self::by_path(&db)
            .into_iter()
            .map(|(id, record)| File::new(id, record.path.clone()))
            .collect())
    }

    fn get_tags(&self, file: &File) -> Result<Vec<Tag>> {
        let db = self.load()?;
        Self::tags_of(Self::record(&db, file)?)
    }

    fn update_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
        let mut db = self.load()?;
        let record = Self::record_mut(&mut db, file)?;
        record.tags.retain(|existing| existing.name != tag.name());
        record.tags.push(TagRecord::from(tag));
        record.tags.sort_by(|a, b| a.name.cmp(&b.name));
        self.save(&db)?;
        info!(file = %file.id(), tag = %tag, "tag updated");
        Ok(())
    }

    fn remove_tag(&mut self, file: &File, tag: &Tag) -> Result<()> {
        let mut db = self.load()?;
        let record = Self::record_mut(&mut db, file)?;
        let before = record.tags.len();
        record.tags.retain(|existing| existing.name != tag.name());
        if record.tags.len() == before {
            return Err(TaggerError::NoTag(tag.name().to_string()));
        }
        self.save(&db)?;
        info!(file = %file.id(), tag = tag.name(), "tag removed");
        Ok(())
    }

    fn update_file(&mut self, file: &File, tags: &[Tag]) -> Result<()> {
        let mut db = self.load()?;
        let owner = db
            .files
            .iter()
            .find(|(_, record)| record.path == file.path())
            .map(|(id, _)| *id);
        if let Some(owner) = owner {
            if owner != file.id() {
                return Err(TaggerError::PathInUse {
                    path: file.path().to_string(),
                    id: owner,
                });
            }
        }

        let added_at = db
            .files
            .get(&file.id())
            .map(|record| record.added_at)
            .unwrap_or_else(Utc::now);
        let tags = normalize_tags(tags).iter().map(TagRecord::from).collect();
        db.files.insert(
            file.id(),
            FileRecord {
                path: file.path().to_string(),
                added_at,
                tags,
            },
        );
        self.save(&db)?;
        info!(file = %file.id(), path = file.path(), "file updated");
        Ok(())
    }

    fn remove_file(&mut self, file: &File) -> Result<()> {
        let mut db = self.load()?;
        if db.files.remove(&file.id()).is_none() {
            return Err(TaggerError::NoFile(file.id().to_string()));
        }
        self.save(&db)?;
        info!(file = %file.id(), "file removed");
        Ok(())
    }

    fn get_added_at(&self, file: &File) -> Result<Option<DateTime<Utc>>> {
        let db = self.load()?;
        Ok(Some(Self::record(&db, file)?.added_at))
    }

    fn get_file_listing(&self) -> Result<Vec<(File, Option<DateTime<Utc>>)>> {
        let db = self.load()?;
        Ok(Self::by_path(&db)
            .into_iter()
            .map(|(id, record)| (File::new(id, record.path.clone()), Some(record.added_at)))
            .collect())
    }

    fn get_matching_files(&self, filter: &Filter) -> Result<Vec<File>> {
        let db = self.load()?;
        let records = Self::by_path(&db);
        let total = records.len();
        let mut matched = Vec::new();

        for (id, record) in records {
            if filter.matches(&Self::tags_of(record)?) {
                matched.push(File::new(id, record.path.clone()));
            }
        }

        debug!(filter = %filter, total, matched = matched.len(), "matched files");
        Ok(matched)
    }
}
