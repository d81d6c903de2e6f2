//! # Notekeep Architecture
//!
//! Notekeep is a small notebook kept in a single flat file. The library does
//! all of the work; the binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu, subcommands, terminal rendering        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (index text → 1-based index)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, search, delete, backup/restore, check         │
//! │  - Returns `CmdResult` values, never prints                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, record.rs)                          │
//! │  - NoteStore: records, obfuscation, rewrite, snapshots      │
//! │  - StorageBackend: FsBackend (prod), MemBackend (tests)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Store File
//!
//! One note per line, five fields joined by `|||`, line feeds in the content
//! escaped as `\n`, every line XORed with a fixed key. See [`record`].
//! There is no cache and no locking: each operation re-reads the whole file,
//! and a delete rewrites it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`record`]: Line format and obfuscation
//! - [`model`]: The [`model::Note`] type
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod store;
