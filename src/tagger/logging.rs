//! Structured logging for the CLI.
//!
//! Library code only emits `tracing` events. The binary installs a subscriber
//! here that writes to stderr, keeping stdout free for command output.

use crate::config::TaggerConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `tagger=debug`.
pub const ENV_LOG: &str = "TAGGER_LOG";

/// Log filter precedence (highest to lowest):
///
/// 1. `--verbose` (debug)
/// 2. `TAGGER_LOG`
/// 3. `log_level` from the config file
fn filter_directive(verbose: bool, env: Option<String>, config: &TaggerConfig) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

fn build_filter(directive: &str, config: &TaggerConfig) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs the global subscriber. Later calls are ignored; the first
/// subscriber wins.
pub fn init_logging(verbose: bool, config: &TaggerConfig) {
    let directive = filter_directive(verbose, std::env::var(ENV_LOG).ok(), config);
    let filter = build_filter(&directive, config);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
