use crate::commands::{CmdResult, ListedFile};
use crate::error::{Result, TaggerError};
use crate::filter::parse;
use crate::store::TagStore;

/// Finds files matching a filter given as one or more words.
///
/// The words are joined with single spaces before parsing, so
/// `["role", "==", "1"]` and `["role == 1"]` are the same filter. A filter that
/// fails to parse never reaches the store. With `strict`, an empty result is
/// [`TaggerError::NoMatches`].
pub fn run<S: TagStore, W: AsRef<str>>(store: &S, words: &[W], strict: bool) -> Result<CmdResult> {
    let text = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    let filter = parse(&text)?;

    let matched = store.get_matching_files(&filter)?;
    if strict && matched.is_empty() {
        return Err(TaggerError::NoMatches);
    }

    Ok(CmdResult::default()
        .with_listed_files(matched.into_iter().map(ListedFile::from).collect()))
}
