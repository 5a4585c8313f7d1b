use crate::commands::helpers::resolve_file;
use crate::commands::{CmdResult, FileSelector};
use crate::error::Result;
use crate::store::TagStore;

/// The selected file's tags, sorted by name.
pub fn run<S: TagStore>(store: &S, selector: &FileSelector) -> Result<CmdResult> {
    let file = resolve_file(store, selector)?;
    let tags = store.get_tags(&file)?;
    Ok(CmdResult::default()
        .with_affected_files(vec![file])
        .with_tags(tags))
}
