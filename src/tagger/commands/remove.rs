use crate::commands::helpers::resolve_file;
use crate::commands::{CmdMessage, CmdResult, FileSelector};
use crate::error::Result;
use crate::store::TagStore;

/// Forgets a file and every tag on it.
pub fn run<S: TagStore>(store: &mut S, selector: &FileSelector) -> Result<CmdResult> {
    let file = resolve_file(store, selector)?;
    store.remove_file(&file)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} {}",
        file.id(),
        file.path()
    )));
    Ok(result.with_affected_files(vec![file]))
}
