//! # API Facade
//!
//! The single entry point for notekeep operations, whichever UI drives them.
//! It dispatches to `commands/*.rs` and normalizes user input (index text
//! into a 1-based index); it holds no business logic and does no printing.
//!
//! `NotesApi<B: StorageBackend>` is generic over the storage backend:
//! `FsBackend` in production, `MemBackend` in tests.

use crate::commands;
use crate::error::{NotekeepError, Result};
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use std::path::Path;

pub struct NotesApi<B: StorageBackend> {
    store: NoteStore<B>,
    backup_name: String,
}

impl<B: StorageBackend> NotesApi<B> {
    /// `backup_name` is how the backup file is named in messages.
    pub fn new(store: NoteStore<B>, backup_name: impl Into<String>) -> Self {
        Self {
            store,
            backup_name: backup_name.into(),
        }
    }

    pub fn add_note(
        &mut self,
        title: &str,
        category: &str,
        content: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, category, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    /// Delete by the index text a user typed, e.g. `"2"`.
    pub fn delete_note<I: AsRef<str>>(&mut self, input: I) -> Result<commands::CmdResult> {
        let index = parse_index(input.as_ref())?;
        commands::delete::run(&mut self.store, index)
    }

    pub fn backup(&self) -> Result<commands::CmdResult> {
        commands::backup::backup(&self.store, &self.backup_name)
    }

    pub fn restore(&mut self) -> Result<commands::CmdResult> {
        commands::backup::restore(&mut self.store, &self.backup_name)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.store)
    }

    /// Write a default `notekeep.json` into `data_dir` if none exists.
    pub fn init_config(&self, data_dir: &Path) -> Result<commands::CmdResult> {
        commands::init::run(data_dir)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }
}

/// Parses a 1-based index. Negative numbers map to 0, which no note has.
fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| NotekeepError::InvalidNumber(trimmed.to_string()))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

pub use commands::{CmdMessage, CmdResult, DisplayNote, MessageLevel};
