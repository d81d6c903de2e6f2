use crate::error::Result;

/// Abstract interface for raw store I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `NoteStore` handles the "what" (records, indexes, snapshots).
pub trait StorageBackend {
    /// Read every line of the store, terminators stripped.
    /// A store that does not exist yet reads as no lines.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Append one line to the store, creating it if needed.
    fn append_line(&self, line: &str) -> Result<()>;

    /// Replace the whole store with `lines`.
    fn write_lines(&self, lines: &[String]) -> Result<()>;

    /// Copy the store byte for byte over the backup.
    /// Returns `Ok(false)` without touching anything if there is no store.
    fn copy_store_to_backup(&self) -> Result<bool>;

    /// Copy the backup byte for byte over the store.
    /// Returns `Ok(false)` without touching anything if there is no backup.
    fn copy_backup_to_store(&self) -> Result<bool>;
}
