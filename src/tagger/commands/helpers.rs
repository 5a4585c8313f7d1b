use crate::commands::FileSelector;
use crate::error::Result;
use crate::model::File;
use crate::store::TagStore;

pub fn resolve_file<S: TagStore>(store: &S, selector: &FileSelector) -> Result<File> {
    match selector {
        FileSelector::Id(id) => store.get_file(id),
        FileSelector::Path(path) => store.get_file_for_path(path),
    }
}
