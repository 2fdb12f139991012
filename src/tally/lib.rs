//! # Tally Architecture
//!
//! Tally is a single-user inventory and budget ledger: named articles with a
//! category, a quantity, a unit price and a free-text description, kept in one
//! JSON document. It is a small library with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Numbered menu, one-shot subcommands, table rendering     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw text (id text, search selector)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, list, search, edit, delete                       │
//! │  - Each one loads, mutates and saves the whole collection   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load() / save() of the full collection  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Shared State
//!
//! Nothing is cached between operations. Each command reloads the document,
//! and mutating commands rewrite it in full. The document path is handed to
//! [`store::fs::FileStore`] when it is built; see [`init`] for how the path is
//! chosen.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Article`, id generation, search selectors, edit inputs
//! - [`config`]: Persisted user configuration
//! - [`init`]: Home directory and document path resolution
//! - [`logging`]: File logging bootstrap
//! - [`error`]: Error types
//! - `cli`: Menu loop, argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
