use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use which::which;

use crate::{DateStyle, NoteError, Result, TitlePolicy};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// How editor text is split into title and content
    pub title_policy: TitlePolicy,

    /// How note dates are rendered
    pub date_style: DateStyle,

    /// Whether the store starts with an undeletable folder
    pub seed_default_folder: bool,

    /// Name of the seed folder
    pub default_folder_name: String,

    /// Whether leaving the editor with blank text deletes the note
    pub purge_blank_on_abandon: bool,

    /// Editor command used by the shell's `edit`
    pub editor_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title_policy: TitlePolicy::default(),
            date_style: DateStyle::default(),
            seed_default_folder: true,
            default_folder_name: "Notes".to_string(),
            purge_blank_on_abandon: true,
            editor_command: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the platform config directory,
    /// or falls back to defaults when neither exists.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(NoteError::ConfigNotFound {
                    path: p.to_path_buf(),
                })
            }
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let Some(path) = path else {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        };

        info!("Loading configuration from {}", path.display());
        let raw = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// `config.json` inside the platform configuration directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pocketnotes").map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.seed_default_folder && self.default_folder_name.trim().is_empty() {
            return Err(NoteError::ConfigError {
                message: "default_folder_name must not be blank".to_string(),
            });
        }
        Ok(())
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        if cfg!(windows) {
            "notepad".to_string()
        } else {
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}
