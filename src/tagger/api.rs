//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for tagger operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings become [`FileSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic; that lives in
//! `commands/*.rs`.
//!
//! ## Generic Over TagStore
//!
//! `TaggerApi<S: TagStore>` is generic over the storage backend:
//! - Production: `TaggerApi<FileStore>`
//! - Testing: `TaggerApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::filter::{parse, Filter};
use crate::model::File;
use crate::store::TagStore;

/// The main API facade for tagger operations.
pub struct TaggerApi<S: TagStore> {
    store: S,
    paths: commands::TaggerPaths,
}

impl<S: TagStore> TaggerApi<S> {
    pub fn new(store: S, paths: commands::TaggerPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_file(&mut self, path: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, path)
    }

    pub fn remove_file(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = FileSelector::parse(selector)?;
        commands::remove::run(&mut self.store, &selector)
    }

    pub fn move_file(&mut self, selector: &str, new_path: &str) -> Result<commands::CmdResult> {
        let selector = FileSelector::parse(selector)?;
        commands::move_file::run(&mut self.store, &selector, new_path)
    }

    pub fn set_tag(
        &mut self,
        selector: &str,
        name: &str,
        value: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let selector = FileSelector::parse(selector)?;
        commands::tagging::set(&mut self.store, &selector, name, value)
    }

    pub fn unset_tag(&mut self, selector: &str, name: &str) -> Result<commands::CmdResult> {
        let selector = FileSelector::parse(selector)?;
        commands::tagging::unset(&mut self.store, &selector, name)
    }

    pub fn match_files<W: AsRef<str>>(
        &self,
        words: &[W],
        strict: bool,
    ) -> Result<commands::CmdResult> {
        commands::matching::run(&self.store, words, strict)
    }

    pub fn get_tags(&self, selector: &str) -> Result<commands::CmdResult> {
        let selector = FileSelector::parse(selector)?;
        commands::get::run(&self.store, &selector)
    }

    pub fn list_files(&self) -> Result<commands::CmdResult> {
        commands::files::run(&self.store)
    }

    /// Parses `text` and returns matching files without going through a command.
    pub fn find(&self, text: &str) -> Result<Vec<File>> {
        let filter: Filter = parse(text)?;
        self.store.get_matching_files(&filter)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::TaggerPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, FileSelector, ListedFile, MessageLevel, TaggerPaths,
};
