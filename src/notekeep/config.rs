use crate::error::{NotekeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "notekeep.json";
const DEFAULT_STORE_FILE: &str = "notes.db";
const DEFAULT_BACKUP_FILE: &str = "notes_backup.db";

/// Configuration for notekeep, read from `notekeep.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Name of the store file, relative to the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Name of the backup file, relative to the data directory
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Rewrite the store through a temporary file and a rename
    #[serde(default = "default_atomic_rewrite")]
    pub atomic_rewrite: bool,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_backup_file() -> String {
    DEFAULT_BACKUP_FILE.to_string()
}

fn default_atomic_rewrite() -> bool {
    true
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            backup_file: default_backup_file(),
            atomic_rewrite: default_atomic_rewrite(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotekeepError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotekeepError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotekeepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotekeepError::Serialization)?;
        fs::write(config_path, content).map_err(NotekeepError::Io)?;
        Ok(())
    }
}
