//! Tag mutation commands.
//!
//! - `set`: attach a plain or valued tag, replacing any tag with the same name
//! - `unset`: detach a tag by name

use crate::commands::helpers::resolve_file;
use crate::commands::{CmdMessage, CmdResult, FileSelector};
use crate::error::{Result, TaggerError};
use crate::model::Tag;
use crate::store::TagStore;
use crate::tags::validate_tag_name;
use tracing::info;

fn checked_name(name: &str) -> Result<()> {
    validate_tag_name(name).map_err(|reason| TaggerError::InvalidTagName {
        name: name.to_string(),
        reason,
    })
}

/// Parses a tag value given on the command line.
pub fn parse_value(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TaggerError::InvalidValue(raw.to_string()))
}

/// Sets `name` (with an optional integer `value`) on the selected file.
pub fn set<S: TagStore>(
    store: &mut S,
    selector: &FileSelector,
    name: &str,
    value: Option<&str>,
) -> Result<CmdResult> {
    checked_name(name)?;
    let tag = match value {
        Some(raw) => Tag::valued(name, parse_value(raw)?)?,
        None => Tag::plain(name)?,
    };

    let file = resolve_file(store, selector)?;
    store.update_tag(&file, &tag)?;
    info!(id = %file.id(), tag = %tag, "set tag");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Set {} on {}", tag, file.path())));
    Ok(result.with_affected_files(vec![file]).with_tags(vec![tag]))
}

/// Removes the tag called `name` from the selected file.
pub fn unset<S: TagStore>(store: &mut S, selector: &FileSelector, name: &str) -> Result<CmdResult> {
    let file = resolve_file(store, selector)?;
    let tag = Tag::plain(name)?;
    store.remove_tag(&file, &tag)?;
    info!(id = %file.id(), tag = name, "unset tag");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} from {}",
        name,
        file.path()
    )));
    Ok(result.with_affected_files(vec![file]))
}
