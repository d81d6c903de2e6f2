use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

use super::helpers::indexed_notes;

pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    let listed = indexed_notes(store)?;
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    Ok(result.with_listed_notes(listed))
}
