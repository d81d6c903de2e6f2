use super::DisplayNote;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

/// All notes in file order, numbered from 1.
pub fn indexed_notes<B: StorageBackend>(store: &NoteStore<B>) -> Result<Vec<DisplayNote>> {
    let notes = store.read_all(None)?;
    Ok(notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote { index: i + 1, note })
        .collect())
}
