//! # Tagger CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination. Everything the
//! CLI calls into (`tagger::api` and below) is UI agnostic.
//!
//! ```text
//! tagger add notes.txt
//! tagger set notes.txt status 1
//! tagger set notes.txt draft
//! tagger match status == 1 AND draft
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
