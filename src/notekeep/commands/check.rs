use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

/// Read the store and report every line that the other commands would
/// silently skip. Never writes.
pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    let mut skipped = Vec::new();
    let notes = store.read_all(Some(&mut skipped))?;

    let mut result = CmdResult::default();
    if skipped.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "All {} records are readable.",
            notes.len()
        )));
        return Ok(result);
    }

    for line in &skipped {
        result.add_message(CmdMessage::warning(format!(
            "Line {}: {}",
            line.line_number, line.reason
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "{} readable, {} skipped.",
        notes.len(),
        skipped.len()
    )));
    Ok(result)
}
