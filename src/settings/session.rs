//! Per-run settings context

use super::{Settings, SettingsStore, Theme};
use tracing::{info, warn};

/// Settings for one run of the client
///
/// Opened at startup, passed to whoever needs it, and closed on exit. Without
/// a store (e.g. no config directory) changes last only for this run.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    store: Option<SettingsStore>,
}

impl Session {
    /// Load settings from `store`, then apply a theme override
    #[must_use]
    pub fn open(store: Option<SettingsStore>, theme_override: Option<Theme>) -> Self {
        let mut settings = store.as_ref().map(SettingsStore::load).unwrap_or_default();
        if let Some(theme) = theme_override {
            settings.theme = theme;
        }
        info!(theme = %settings.theme, persisted = store.is_some(), "settings session opened");
        Self { settings, store }
    }

    /// A session that never touches the disk
    #[must_use]
    pub fn ephemeral(theme: Theme) -> Self {
        Self {
            settings: Settings { theme },
            store: None,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.settings.theme
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch between light and dark, persisting the choice right away
    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        self.persist();
        self.settings.theme
    }

    /// Final save before exit
    pub fn close(self) {
        self.persist();
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.save(&self.settings) {
            warn!(error = %err, "failed to save settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_is_persisted_immediately() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));

        let mut session = Session::open(Some(store.clone()), None);
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);

        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn override_wins_over_stored_theme() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        store.save(&Settings { theme: Theme::Light }).unwrap();

        let session = Session::open(Some(store), Some(Theme::Dark));
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn close_writes_settings() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));

        Session::open(Some(store.clone()), Some(Theme::Dark)).close();

        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn ephemeral_session_toggles_in_memory() {
        let mut session = Session::ephemeral(Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(session.settings().theme, Theme::Light);
    }
}
