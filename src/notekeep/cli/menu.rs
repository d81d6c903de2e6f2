//! # Interactive Menu
//!
//! The numbered menu shown when notekeep runs without a subcommand. Input
//! and output are parameters, so the same loop runs against a terminal or
//! against in-memory buffers in tests.
//!
//! Failures inside an action are reported and the loop carries on. Only
//! option `7` or end of input ends it.

use super::render::{
    render_full_notes, render_index_list, render_messages, render_search_results,
};
use notekeep::api::NotesApi;
use notekeep::error::{NotekeepError, Result};
use notekeep::store::backend::StorageBackend;
use std::io::{BufRead, Write};

const MENU: &str = "Choose: 1-add  2-viewAll  3-searchTitle  4-delete  5-backup  6-restore  7-exit";
const CONTENT_TERMINATOR: &str = ".done";

enum Flow {
    Continue,
    Exit,
}

pub fn run_menu<B, R, W>(api: &mut NotesApi<B>, input: &mut R, out: &mut W) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to notekeep")?;
    loop {
        writeln!(out)?;
        writeln!(out, "{}", MENU)?;
        let Some(option) = prompt(input, out, "option> ")? else {
            end_of_input(out)?;
            return Ok(());
        };

        match dispatch(api, input, out, option.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(e) => report_error(out, &e)?,
        }
    }
}

fn dispatch<B, R, W>(api: &mut NotesApi<B>, input: &mut R, out: &mut W, option: &str) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    match option {
        "1" => add_note(api, input, out),
        "2" => {
            let result = api.list_notes()?;
            render_full_notes(out, &result.listed_notes)?;
            render_messages(out, &result.messages)?;
            Ok(Flow::Continue)
        }
        "3" => search(api, input, out),
        "4" => delete_note(api, input, out),
        "5" => {
            render_messages(out, &api.backup()?.messages)?;
            Ok(Flow::Continue)
        }
        "6" => {
            render_messages(out, &api.restore()?.messages)?;
            Ok(Flow::Continue)
        }
        "7" => {
            writeln!(out, "Bye!")?;
            Ok(Flow::Exit)
        }
        _ => {
            writeln!(out, "Unknown option.")?;
            Ok(Flow::Continue)
        }
    }
}

fn add_note<B, R, W>(api: &mut NotesApi<B>, input: &mut R, out: &mut W) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(title) = prompt(input, out, "Title: ")? else {
        return end_of_input(out);
    };
    let Some(category) = prompt(input, out, "Category (eg. personal, study): ")? else {
        return end_of_input(out);
    };

    writeln!(out, "Content (end with a single line: {} ):", CONTENT_TERMINATOR)?;
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line == CONTENT_TERMINATOR {
            break;
        }
        lines.push(line);
    }

    let result = api.add_note(&title, &category, &lines.join("\n"))?;
    render_messages(out, &result.messages)?;
    Ok(Flow::Continue)
}

fn search<B, R, W>(api: &mut NotesApi<B>, input: &mut R, out: &mut W) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(term) = prompt(input, out, "Enter title substring to search: ")? else {
        return end_of_input(out);
    };
    let result = api.search_notes(&term)?;
    render_search_results(out, &result.listed_notes)?;
    render_messages(out, &result.messages)?;
    Ok(Flow::Continue)
}

fn delete_note<B, R, W>(api: &mut NotesApi<B>, input: &mut R, out: &mut W) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let listed = api.list_notes()?.listed_notes;
    if listed.is_empty() {
        writeln!(out, "No notes to delete.")?;
        return Ok(Flow::Continue);
    }
    render_index_list(out, &listed)?;

    let Some(choice) = prompt(input, out, "Enter number to delete: ")? else {
        return end_of_input(out);
    };
    let result = api.delete_note(&choice)?;
    render_messages(out, &result.messages)?;
    Ok(Flow::Continue)
}

/// Input ran out at a prompt: leave the way option 7 does.
fn end_of_input<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out)?;
    writeln!(out, "Bye!")?;
    Ok(Flow::Exit)
}

fn report_error<W: Write>(out: &mut W, error: &NotekeepError) -> Result<()> {
    tracing::debug!(%error, "menu action failed");
    match error {
        NotekeepError::InvalidIndex { .. } => writeln!(out, "Invalid index.")?,
        NotekeepError::InvalidNumber(_) => writeln!(out, "Not a valid number.")?,
        other => writeln!(out, "{}", other)?,
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    read_line(input)
}

/// Next input line without its terminator, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekeep::store::mem_backend::MemBackend;
    use notekeep::store::NoteStore;
    use std::io::Cursor;

    fn api() -> NotesApi<MemBackend> {
        NotesApi::new(NoteStore::with_backend(MemBackend::new()), "notes_backup.db")
    }

    fn session(api: &mut NotesApi<MemBackend>, script: &str) -> String {
        console::set_colors_enabled(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_menu(api, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_view_and_search() {
        let mut api = api();
        let out = session(
            &mut api,
            "1\nGroceries\npersonal\nmilk\nbread\n.done\n2\n3\ngrocer\n3\nxyz\n7\n",
        );

        assert!(out.contains("Saved note (Groceries) at "));
        assert!(out.contains("[1] Groceries | personal | "));
        assert!(out.contains("----\nmilk\nbread\n====\n"));
        assert!(out.contains("No matching notes."));
        assert!(out.ends_with("Bye!\n"));

        let notes = api.store().read_all(None).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "milk\nbread");
    }

    #[test]
    fn view_on_empty_store() {
        let out = session(&mut api(), "2\n7\n");
        assert!(out.contains("No notes yet."));
    }

    #[test]
    fn delete_flow_and_bad_input() {
        let mut api = api();
        api.add_note("first", "a", "").unwrap();
        api.add_note("second", "b", "").unwrap();

        let out = session(&mut api, "4\nabc\n4\n9\n4\n0\n4\n1\n7\n");
        assert!(out.contains("[2] second | b | "));
        assert!(out.contains("Not a valid number."));
        assert_eq!(out.matches("Invalid index.").count(), 2);
        assert!(out.contains("Deleted note: first"));

        let notes = api.store().read_all(None).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "second");
    }

    #[test]
    fn delete_on_empty_store_does_not_prompt() {
        let out = session(&mut api(), "4\n7\n");
        assert!(out.contains("No notes to delete."));
        assert!(!out.contains("Enter number to delete"));
    }

    #[test]
    fn backup_and_restore_messages() {
        let mut api = api();
        let out = session(&mut api, "5\n6\n");
        assert!(out.contains("No notes file to backup."));
        assert!(out.contains("No backup found."));

        api.add_note("keep", "", "").unwrap();
        let out = session(&mut api, "5\n4\n1\n6\n2\n7\n");
        assert!(out.contains("Backup written to notes_backup.db"));
        assert!(out.contains("Deleted note: keep"));
        assert!(out.contains("Restored from notes_backup.db"));
        assert!(out.contains("[1] keep |  | "));
    }

    #[test]
    fn unknown_option_keeps_looping() {
        let out = session(&mut api(), "9\n\n7\n");
        assert_eq!(out.matches("Unknown option.").count(), 2);
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let out = session(&mut api(), "");
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn end_of_input_at_any_prompt_says_bye() {
        for script in ["1\n", "1\nt\n", "3\n", "4\n"] {
            let mut api = api();
            api.add_note("existing", "c", "").unwrap();
            let out = session(&mut api, script);
            assert!(out.ends_with("\nBye!\n"), "script {:?} ended with {:?}", script, out);
            assert_eq!(api.store().read_all(None).unwrap().len(), 1);
        }
    }

    #[test]
    fn unstorable_text_is_reported_and_loop_continues() {
        let mut api = api();
        let out = session(&mut api, "1\nalert\nc\nding\u{7}dong\n.done\n2\n7\n");
        assert!(out.contains("Cannot save note:"));
        assert!(out.contains("No notes yet."));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn end_of_input_while_adding_saves_collected_content() {
        let mut api = api();
        session(&mut api, "1\nt\nc\nunfinished");
        let notes = api.store().read_all(None).unwrap();
        assert_eq!(notes[0].content, "unfinished");
    }

    #[test]
    fn io_errors_are_reported_and_loop_continues() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);
        let out = session(&mut api, "1\nt\nc\n.done\n2\n7\n");
        assert!(out.contains("I/O error: simulated write error"));
        assert!(out.contains("No notes yet."));
    }

    #[test]
    fn crlf_input_is_accepted() {
        let mut api = api();
        let out = session(&mut api, "1\r\nTitle\r\ncat\r\nbody\r\n.done\r\n7\r\n");
        assert!(out.contains("Saved note (Title)"));
        assert_eq!(api.store().read_all(None).unwrap()[0].content, "body");
    }
}
