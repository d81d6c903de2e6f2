use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep", bin_name = "notekeep", version)]
#[command(
    about = "Keep short notes in a local flat file",
    long_about = "Keep short notes in a local flat file.\n\nRun without a command for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notes and backup files (default: current directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Use the per-user data directory
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Category of the note
        #[arg(short, long, default_value = "")]
        category: String,

        /// Content of the note (read from stdin when omitted and stdin is piped)
        #[arg(long)]
        content: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List {
        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search note titles (case-insensitive)
    Search { term: String },

    /// Delete a note by its listed number
    #[command(alias = "rm")]
    Delete {
        /// Number shown by `list`
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Copy the notes file to the backup file
    Backup,

    /// Copy the backup file over the notes file
    Restore,

    /// Report records that cannot be read
    Check,

    /// Start the interactive menu
    Menu,

    /// Write a default notekeep.json to the data directory
    Init,
}
