use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;

/// Delete the note shown at 1-based `index` and rewrite the store.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, index: usize) -> Result<CmdResult> {
    let notes = store.read_all(None)?;
    if notes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No notes to delete.")));
    }

    let removed = store.delete_at(notes, index)?;
    let message = CmdMessage::success(format!("Deleted note: {}", removed.title));
    Ok(CmdResult::default()
        .with_affected_notes(vec![removed])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::NotekeepError;
    use crate::store::mem_backend::fixtures::StoreFixture;

    #[test]
    fn removes_the_indexed_note() {
        let mut fixture = StoreFixture::new().with_notes(3);
        let result = run(&mut fixture.store, 2).unwrap();
        assert_eq!(result.affected_notes[0].title, "Test Note 2");
        assert_eq!(result.messages[0].content, "Deleted note: Test Note 2");

        let listed = list::run(&fixture.store).unwrap().listed_notes;
        let titles: Vec<_> = listed.iter().map(|dn| dn.note.title.as_str()).collect();
        assert_eq!(titles, vec!["Test Note 1", "Test Note 3"]);
    }

    #[test]
    fn rejects_out_of_range_indexes() {
        let mut fixture = StoreFixture::new().with_notes(2);
        let before = fixture.store.backend().raw_store();

        assert!(matches!(
            run(&mut fixture.store, 0),
            Err(NotekeepError::InvalidIndex { index: 0, count: 2 })
        ));
        assert!(matches!(
            run(&mut fixture.store, 3),
            Err(NotekeepError::InvalidIndex { index: 3, count: 2 })
        ));
        assert_eq!(fixture.store.backend().raw_store(), before);
    }

    #[test]
    fn empty_store_is_not_an_error() {
        let mut fixture = StoreFixture::new();
        let result = run(&mut fixture.store, 1).unwrap();
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].content, "No notes to delete.");
        assert!(fixture.store.backend().raw_store().is_none());
    }

    #[test]
    fn deleting_the_last_note_leaves_an_empty_store() {
        let mut fixture = StoreFixture::new().with_notes(1);
        run(&mut fixture.store, 1).unwrap();
        assert_eq!(fixture.store.backend().raw_store().as_deref(), Some(""));
        assert!(list::run(&fixture.store).unwrap().listed_notes.is_empty());
    }
}
