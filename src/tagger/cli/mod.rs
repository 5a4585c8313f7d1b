//! # CLI Behavior
//!
//! This is **one possible UI client** for tagger, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Output
//!
//! - File listings print one file per line as `<uuid> <path>`
//!   (`files --long` prefixes the time the file was added).
//! - Tags print one per line as `name` or `name=value`.
//! - Status messages are coloured by level; errors go to stderr.
//! - Logs go to stderr, filtered by `--verbose`, `TAGGER_LOG` or the
//!   configured `log-level`.
//!
//! ## Selecting Files
//!
//! Commands taking a file accept its registered path, or `uuid:<id>` to
//! select by identifier (useful after the file moved on disk).

mod commands;
mod print;
pub mod setup;

pub use commands::run;
