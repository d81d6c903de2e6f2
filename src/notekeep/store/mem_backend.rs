use super::backend::StorageBackend;
use crate::error::{NotekeepError, Result};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Holds the raw text of the store and backup files so tests can inspect
/// exactly what would have been written. Uses `RefCell` since notekeep is
/// single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct MemBackend {
    store: RefCell<Option<String>>,
    backup: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw store text, `None` if nothing was ever written.
    pub fn raw_store(&self) -> Option<String> {
        self.store.borrow().clone()
    }

    pub fn raw_backup(&self) -> Option<String> {
        self.backup.borrow().clone()
    }

    /// Replace the store text directly, bypassing the record format.
    pub fn set_raw_store(&self, text: impl Into<String>) {
        *self.store.borrow_mut() = Some(text.into());
    }

    fn check_write(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(NotekeepError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .borrow()
            .as_deref()
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.check_write()?;
        let mut store = self.store.borrow_mut();
        let text = store.get_or_insert_with(String::new);
        text.push_str(line);
        text.push('\n');
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.check_write()?;
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        *self.store.borrow_mut() = Some(text);
        Ok(())
    }

    fn copy_store_to_backup(&self) -> Result<bool> {
        let Some(text) = self.raw_store() else {
            return Ok(false);
        };
        self.check_write()?;
        *self.backup.borrow_mut() = Some(text);
        Ok(true)
    }

    fn copy_backup_to_store(&self) -> Result<bool> {
        let Some(text) = self.raw_backup() else {
            return Ok(false);
        };
        self.check_write()?;
        *self.store.borrow_mut() = Some(text);
        Ok(true)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;
    use crate::store::NoteStore;

    pub struct StoreFixture {
        pub store: NoteStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::with_backend(MemBackend::new()),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(
                    format!("Test Note {}", i + 1),
                    "test".to_string(),
                    format!("Content for note {}", i + 1),
                );
                self.store.append(&note).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, category: &str, content: &str) -> Self {
            let note = Note::new(title.to_string(), category.to_string(), content.to_string());
            self.store.append(&note).unwrap();
            self
        }

        pub fn with_raw_line(self, line: &str) -> Self {
            self.store.backend().append_line(line).unwrap();
            self
        }
    }
}
