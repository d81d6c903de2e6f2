//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::StorageBackend`] moves raw store lines and whole-file copies.
//!   It knows nothing about notes.
//! - [`NoteStore`] owns the record logic on top of a backend: serializing,
//!   obfuscating, parsing, deleting by index, backup and restore.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, two files in a data directory
//!   (`notes.db` and `notes_backup.db` unless configured otherwise)
//! - [`mem_backend::MemBackend`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── notes.db          # one obfuscated record per line
//! ├── notes_backup.db   # byte copy of notes.db at backup time
//! └── notekeep.json     # optional config
//! ```
//!
//! There is no cache: every operation re-reads the store file, and a delete
//! rewrites it completely.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use note_store::{NoteStore, SnapshotOutcome};
