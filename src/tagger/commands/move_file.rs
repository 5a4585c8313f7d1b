use crate::commands::helpers::resolve_file;
use crate::commands::{CmdMessage, CmdResult, FileSelector};
use crate::error::{Result, TaggerError};
use crate::store::TagStore;
use tracing::info;

/// Points a file at a new path. Identity and tags are kept.
pub fn run<S: TagStore>(
    store: &mut S,
    selector: &FileSelector,
    new_path: &str,
) -> Result<CmdResult> {
    if new_path.is_empty() {
        return Err(TaggerError::Api("New path cannot be empty".to_string()));
    }

    let file = resolve_file(store, selector)?;
    let mut result = CmdResult::default();

    if file.path() == new_path {
        result.add_message(CmdMessage::info(format!("{} is already at {}", file.id(), new_path)));
        return Ok(result.with_affected_files(vec![file]));
    }

    let tags = store.get_tags(&file)?;
    let moved = file.moved_to(new_path);
    store.update_file(&moved, &tags)?;
    info!(id = %file.id(), from = file.path(), to = new_path, "moved file");

    result.add_message(CmdMessage::success(format!(
        "Moved {} to {}",
        file.path(),
        moved.path()
    )));
    Ok(result.with_affected_files(vec![moved]))
}
