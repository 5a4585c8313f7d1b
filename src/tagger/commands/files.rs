use crate::commands::{CmdResult, ListedFile};
use crate::error::Result;
use crate::store::TagStore;

/// Every registered file, sorted by path, with its registration time.
pub fn run<S: TagStore>(store: &S) -> Result<CmdResult> {
    let listed = store
        .get_file_listing()?
        .into_iter()
        .map(|(file, added_at)| ListedFile { file, added_at })
        .collect();
    Ok(CmdResult::default().with_listed_files(listed))
}
