use crate::commands::{CmdMessage, CmdResult};
use crate::config::{NotesConfig, CONFIG_FILENAME};
use crate::error::Result;
use std::path::Path;

/// Write a config file with the default settings into `data_dir`, unless one
/// is already there.
pub fn run(data_dir: &Path) -> Result<CmdResult> {
    let config_path = data_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Config already exists: {}",
            config_path.display()
        ))));
    }

    NotesConfig::default().save(data_dir)?;
    tracing::debug!(path = %config_path.display(), "wrote default config");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Wrote {}",
        config_path.display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use std::fs;

    #[test]
    fn writes_defaults_that_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path()).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.ends_with(CONFIG_FILENAME));
        assert_eq!(
            NotesConfig::load(dir.path()).unwrap(),
            NotesConfig::default()
        );
    }

    #[test]
    fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("notes");
        run(&nested).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let custom = r#"{ "store_file": "journal.db" }"#;
        fs::write(dir.path().join(CONFIG_FILENAME), custom).unwrap();

        let result = run(dir.path()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.starts_with("Config already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap(),
            custom
        );
    }
}
