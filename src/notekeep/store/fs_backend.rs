use super::backend::StorageBackend;
use crate::config::NotesConfig;
use crate::error::{NotekeepError, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    store_path: PathBuf,
    backup_path: PathBuf,
    atomic_rewrite: bool,
}

impl FsBackend {
    pub fn new(store_path: PathBuf, backup_path: PathBuf) -> Self {
        Self {
            store_path,
            backup_path,
            atomic_rewrite: true,
        }
    }

    /// Resolves the configured file names against `data_dir`.
    pub fn from_config(data_dir: &Path, config: &NotesConfig) -> Self {
        Self::new(
            data_dir.join(&config.store_file),
            data_dir.join(&config.backup_file),
        )
        .with_atomic_rewrite(config.atomic_rewrite)
    }

    pub fn with_atomic_rewrite(mut self, atomic: bool) -> Self {
        self.atomic_rewrite = atomic;
        self
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NotekeepError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .store_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "notes".to_string());
        self.store_path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<bool> {
        if !from.exists() {
            return Ok(false);
        }
        self.ensure_parent(to)?;
        let bytes = fs::copy(from, to).map_err(NotekeepError::Io)?;
        tracing::debug!(from = %from.display(), to = %to.display(), bytes, "copied store file");
        Ok(true)
    }
}

impl StorageBackend for FsBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        if !self.store_path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(&self.store_path).map_err(NotekeepError::Io)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(NotekeepError::Io)?;
        Ok(lines)
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.ensure_parent(&self.store_path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.store_path)
            .map_err(NotekeepError::Io)?;
        writeln!(file, "{}", line).map_err(NotekeepError::Io)?;
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.ensure_parent(&self.store_path)?;

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        if !self.atomic_rewrite {
            // Truncates first: a crash before the write completes loses the store.
            fs::write(&self.store_path, content).map_err(NotekeepError::Io)?;
            return Ok(());
        }

        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotekeepError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.store_path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotekeepError::Io(e));
        }
        Ok(())
    }

    fn copy_store_to_backup(&self) -> Result<bool> {
        self.copy_file(&self.store_path, &self.backup_path)
    }

    fn copy_backup_to_store(&self) -> Result<bool> {
        self.copy_file(&self.backup_path, &self.store_path)
    }
}
