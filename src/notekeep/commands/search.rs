use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

use super::helpers::indexed_notes;

/// Case-insensitive substring match on titles. Matches keep the index
/// they have in the full listing, so they can be passed to `delete`.
pub fn run<B: StorageBackend>(store: &NoteStore<B>, term: &str) -> Result<CmdResult> {
    let term_lower = term.trim().to_lowercase();
    let matches: Vec<_> = indexed_notes(store)?
        .into_iter()
        .filter(|dn| dn.note.title_matches(&term_lower))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matching notes."));
    }
    Ok(result.with_listed_notes(matches))
}
