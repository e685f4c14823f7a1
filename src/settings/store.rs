//! JSON settings file

use super::Settings;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const SETTINGS_FILE: &str = "settings.json";

/// Errors raised while persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No home/config directory could be resolved on this platform.
    #[error("could not resolve a configuration directory")]
    NoConfigDir,

    #[error("settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reads and writes [`Settings`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// A store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform's per-user config location
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoConfigDir`] when no home directory is known.
    pub fn default_location() -> Result<Self, SettingsError> {
        let dirs = project_dirs().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::at(dirs.config_dir().join(SETTINGS_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on a missing or unreadable file
    #[must_use]
    pub fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "settings unreadable, using defaults");
                return Settings::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "settings corrupt, using defaults");
            Settings::default()
        })
    }

    /// Save settings, replacing the file atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }

        let data = serde_json::to_vec_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Project directories shared by settings and logs
#[must_use]
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "oceanwordsplash", "word_splash")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));

        store.save(&Settings { theme: Theme::Dark }).unwrap();

        assert_eq!(store.load().theme, Theme::Dark);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(SettingsStore::at(path).load(), Settings::default());
    }

    #[test]
    fn saved_file_is_readable_json() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        store.save(&Settings { theme: Theme::Dark }).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(r#""theme": "dark""#));
    }
}
