use super::backend::StorageBackend;
use crate::error::{NotekeepError, Result};
use crate::model::Note;
use crate::record::{parse_record, to_store_line, SkippedLine, XOR_KEY};

/// Result of a backup or restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Copied,
    /// The file to copy from does not exist; nothing was touched.
    SourceMissing,
}

/// Record-level access to the notes store.
///
/// Every write obfuscates and every read de-obfuscates, exactly once, using
/// the same key.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    key: u16,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: XOR_KEY,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append one note as a single obfuscated line.
    pub fn append(&mut self, note: &Note) -> Result<()> {
        let line = to_store_line(note, self.key)?;
        self.backend.append_line(&line)?;
        tracing::debug!(id = %note.id, "appended note");
        Ok(())
    }

    /// Read every note in file order.
    ///
    /// Blank lines are skipped. Lines that do not parse are dropped; when a
    /// collector is given, each dropped line is reported to it.
    pub fn read_all(&self, mut diagnostics: Option<&mut Vec<SkippedLine>>) -> Result<Vec<Note>> {
        let lines = self.backend.read_lines()?;
        let mut notes = Vec::with_capacity(lines.len());

        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line, self.key) {
                Ok(note) => notes.push(note),
                Err(reason) => {
                    tracing::debug!(line = i + 1, %reason, "skipping malformed record");
                    if let Some(collector) = diagnostics.as_deref_mut() {
                        collector.push(SkippedLine {
                            line_number: i + 1,
                            reason,
                        });
                    }
                }
            }
        }

        Ok(notes)
    }

    /// Replace the store contents with `notes`, in order. Nothing is written
    /// if any note cannot be stored.
    pub fn rewrite(&mut self, notes: &[Note]) -> Result<()> {
        let lines = notes
            .iter()
            .map(|note| to_store_line(note, self.key))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.backend.write_lines(&lines)
    }

    /// Remove the note at 1-based `index` from `notes` and rewrite the store
    /// with the rest. Out-of-range indexes fail without touching the store.
    pub fn delete_at(&mut self, mut notes: Vec<Note>, index: usize) -> Result<Note> {
        if index == 0 || index > notes.len() {
            return Err(NotekeepError::InvalidIndex {
                index,
                count: notes.len(),
            });
        }
        let removed = notes.remove(index - 1);
        self.rewrite(&notes)?;
        tracing::debug!(id = %removed.id, remaining = notes.len(), "deleted note");
        Ok(removed)
    }

    pub fn backup(&self) -> Result<SnapshotOutcome> {
        Ok(outcome(self.backend.copy_store_to_backup()?))
    }

    pub fn restore(&mut self) -> Result<SnapshotOutcome> {
        Ok(outcome(self.backend.copy_backup_to_store()?))
    }
}

fn outcome(copied: bool) -> SnapshotOutcome {
    if copied {
        SnapshotOutcome::Copied
    } else {
        SnapshotOutcome::SourceMissing
    }
}
