//! # CLI Layer
//!
//! One client of the notekeep library, and the only place that:
//! - Knows about stdin, stdout and stderr
//! - Parses arguments
//! - Installs the log subscriber
//! - Formats output for humans
//!
//! ## Structure
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `init_context()`: resolves the data directory and config, builds the API
//! - `handle_*()`: one handler per subcommand; no subcommand runs the menu

use super::menu::run_menu;
use super::render::{
    render_full_notes, render_json, render_messages, render_search_results,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use notekeep::api::NotesApi;
use notekeep::config::NotesConfig;
use notekeep::error::{NotekeepError, Result};
use notekeep::store::fs_backend::FsBackend;
use notekeep::store::NoteStore;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: NotesApi<FsBackend>,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Add {
            title,
            category,
            content,
        }) => handle_add(&mut ctx, title, category, content),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Backup) => handle_backup(&ctx),
        Some(Commands::Restore) => handle_restore(&mut ctx),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = NotesConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        NotesConfig::default()
    });
    tracing::debug!(dir = %data_dir.display(), ?config, "using data directory");

    let backend = FsBackend::from_config(&data_dir, &config);
    let api = NotesApi::new(NoteStore::with_backend(backend), config.backup_file.clone());
    Ok(AppContext { api, data_dir })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let proj_dirs = ProjectDirs::from("com", "notekeep", "notekeep").ok_or_else(|| {
            NotekeepError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_menu(&mut ctx.api, &mut input, &mut out)
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    category: String,
    content: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(text) => text,
        None if !io::stdin().is_terminal() => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => String::new(),
    };

    let result = ctx.api.add_note(&title, &category, &content)?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_notes()?;
    let mut out = io::stdout().lock();
    if json {
        render_json(&mut out, &result.listed_notes)?;
        return Ok(());
    }
    render_full_notes(&mut out, &result.listed_notes)?;
    render_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_notes(&term)?;
    let mut out = io::stdout().lock();
    render_search_results(&mut out, &result.listed_notes)?;
    render_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.delete_note(&index)?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_backup(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.backup()?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_restore(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.restore()?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init_config(&ctx.data_dir)?;
    render_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}
