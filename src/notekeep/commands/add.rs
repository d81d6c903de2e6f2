use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    title: &str,
    category: &str,
    content: &str,
) -> Result<CmdResult> {
    let note = Note::new(
        title.trim().to_string(),
        category.trim().to_string(),
        content.trim().to_string(),
    );
    store.append(&note)?;

    let message = CmdMessage::success(format!(
        "Saved note ({}) at {}",
        note.title, note.timestamp
    ));
    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(message))
}
