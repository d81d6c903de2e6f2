//! # Rendering
//!
//! Turns command results into terminal text. Every function writes to a
//! caller-supplied `Write` so the menu and the tests can capture output.
//! Colors come from [`NOTEKEEP_THEME`] and switch off automatically when
//! the terminal does not support them.

use super::styles::NOTEKEEP_THEME;
use chrono::Local;
use notekeep::api::{CmdMessage, DisplayNote, MessageLevel};
use notekeep::model::Note;
use std::io::{self, Write};

pub fn render_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    let theme = &*NOTEKEEP_THEME;
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &theme.info,
            MessageLevel::Success => &theme.success,
            MessageLevel::Warning => &theme.warning,
        };
        writeln!(out, "{}", style.apply_to(&message.content))?;
    }
    Ok(())
}

/// One header line per note, as shown before picking a note to delete.
pub fn render_index_list<W: Write>(out: &mut W, notes: &[DisplayNote]) -> io::Result<()> {
    for dn in notes {
        write_header(out, Some(dn.index), &dn.note)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Full view: header, rule, content, closing rule.
pub fn render_full_notes<W: Write>(out: &mut W, notes: &[DisplayNote]) -> io::Result<()> {
    let theme = &*NOTEKEEP_THEME;
    for dn in notes {
        write_header(out, Some(dn.index), &dn.note)?;
        if let Some(age) = format_age(&dn.note) {
            write!(out, "  {}", theme.age.apply_to(format!("({})", age)))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", theme.rule.apply_to("----"))?;
        writeln!(out, "{}", dn.note.content)?;
        writeln!(out, "{}", theme.rule.apply_to("===="))?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_search_results<W: Write>(out: &mut W, notes: &[DisplayNote]) -> io::Result<()> {
    let theme = &*NOTEKEEP_THEME;
    for dn in notes {
        write_header(out, None, &dn.note)?;
        writeln!(out)?;
        writeln!(out, "{}", dn.note.content)?;
        writeln!(out, "{}", theme.rule.apply_to("----"))?;
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, notes: &[DisplayNote]) -> io::Result<()> {
    let notes: Vec<&Note> = notes.iter().map(|dn| &dn.note).collect();
    serde_json::to_writer_pretty(&mut *out, &notes)?;
    writeln!(out)
}

fn write_header<W: Write>(out: &mut W, index: Option<usize>, note: &Note) -> io::Result<()> {
    let theme = &*NOTEKEEP_THEME;
    if let Some(index) = index {
        write!(out, "{} ", theme.index.apply_to(format!("[{}]", index)))?;
    }
    write!(
        out,
        "{} | {} | {}",
        theme.title.apply_to(&note.title),
        theme.meta.apply_to(&note.category),
        note.timestamp
    )
}

/// "3 days ago" style age, or `None` if the timestamp is not in the usual shape.
fn format_age(note: &Note) -> Option<String> {
    let created = note.created_at()?;
    let elapsed = Local::now().naive_local().signed_duration_since(created);
    let formatter = timeago::Formatter::new();
    Some(formatter.convert(elapsed.to_std().unwrap_or_default()))
}
