//! # Tagger Architecture
//!
//! Tagger attaches tags, plain or integer-valued, to files and selects files
//! with boolean filter expressions such as:
//!
//! ```text
//! status == 1 AND (draft OR review)
//! ```
//!
//! Like any UI-agnostic library, the core never touches the terminal. The
//! `tagger` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → FileSelector)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Engine (filter/)   │  Storage Layer (store/)        │
//! │  - Lexer, parser, AST      │  - TagStore trait              │
//! │  - Evaluation              │  - FileStore, InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filter Engine
//!
//! [`filter::parse`] turns text into an immutable [`filter::Filter`], and
//! [`filter::Filter::matches`] evaluates it against a tag set. The engine is
//! pure: no I/O, no shared state, and filters are `Send + Sync`.
//!
//! ```
//! use tagger::filter::parse;
//! use tagger::model::Tag;
//!
//! let filter = parse("role == 1 OR status").unwrap();
//! let tags = vec![Tag::valued("role", 1).unwrap()];
//! assert!(filter.matches(&tags));
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Filter engine** (`filter/*.rs`): lexer, parser and evaluation units.
//! 2. **Stores** (`store/*.rs`): the contract against both backends.
//! 3. **Commands** (`commands/*.rs`): business logic over `InMemoryStore`.
//! 4. **CLI** (`tests/`): end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Filter lexer, parser, AST and evaluation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Tag`, `File`)
//! - [`tags`]: Tag name validation
//! - [`config`]: Configuration management
//! - [`init`]: Context setup for the CLI
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod tags;
