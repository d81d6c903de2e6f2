use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::{NoteStore, SnapshotOutcome};

/// Copy the store over the backup. `backup_name` is only used in messages.
pub fn backup<B: StorageBackend>(store: &NoteStore<B>, backup_name: &str) -> Result<CmdResult> {
    let message = match store.backup()? {
        SnapshotOutcome::Copied => CmdMessage::success(format!("Backup written to {}", backup_name)),
        SnapshotOutcome::SourceMissing => CmdMessage::warning("No notes file to backup."),
    };
    Ok(CmdResult::default().with_message(message))
}

/// Copy the backup over the store.
pub fn restore<B: StorageBackend>(
    store: &mut NoteStore<B>,
    backup_name: &str,
) -> Result<CmdResult> {
    let message = match store.restore()? {
        SnapshotOutcome::Copied => CmdMessage::success(format!("Restored from {}", backup_name)),
        SnapshotOutcome::SourceMissing => CmdMessage::warning("No backup found."),
    };
    Ok(CmdResult::default().with_message(message))
}
