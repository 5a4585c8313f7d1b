use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaggerError};
use crate::model::File;
use crate::store::TagStore;
use tracing::info;

/// Registers `path` with a fresh identifier and no tags.
///
/// Registering a path twice is not an error: the existing file is returned
/// with a warning.
pub fn run<S: TagStore>(store: &mut S, path: &str) -> Result<CmdResult> {
    if path.is_empty() {
        return Err(TaggerError::Api("Path cannot be empty".to_string()));
    }

    let mut result = CmdResult::default();
    match store.get_file_for_path(path) {
        Ok(existing) => {
            result.add_message(CmdMessage::warning(format!(
                "Already registered: {} {}",
                existing.id(),
                existing.path()
            )));
            return Ok(result.with_affected_files(vec![existing]));
        }
        Err(TaggerError::NoFile(_)) => {}
        Err(e) => return Err(e),
    }

    let file = File::register(path);
    store.update_file(&file, &[])?;
    info!(id = %file.id(), path, "registered file");

    result.add_message(CmdMessage::success(format!(
        "Added {} {}",
        file.id(),
        file.path()
    )));
    Ok(result.with_affected_files(vec![file]))
}
