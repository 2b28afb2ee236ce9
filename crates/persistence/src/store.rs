//! The settings store: canonical owner of settings and templates.
//!
//! All reads and writes go through the `PersistenceAdapter`; the store's
//! side effects are confined to the two keys below. Loading never fails in a
//! user-visible way: absent or malformed stored data falls back to the
//! built-in defaults (settings) or the seed collection (templates).

use domain::models::{seed_templates, EmailSettings, StoredSettings, Template};
use tracing::{debug, warn};

use crate::adapter::PersistenceAdapter;
use crate::error::PersistenceError;

/// Storage key for the settings record.
pub const SETTINGS_KEY: &str = "emailSettings";
/// Storage key for the template collection.
pub const TEMPLATES_KEY: &str = "emailTemplates";

/// Single source of truth for `EmailSettings` and the template collection.
#[derive(Debug)]
pub struct SettingsStore<A: PersistenceAdapter> {
    adapter: A,
    settings: EmailSettings,
    templates: Vec<Template>,
}

impl<A: PersistenceAdapter> SettingsStore<A> {
    /// Creates a store with default settings and the seed template
    /// collection; call [`load`](Self::load) to rehydrate persisted state.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            settings: EmailSettings::default(),
            templates: seed_templates(),
        }
    }

    pub fn settings(&self) -> &EmailSettings {
        &self.settings
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Rehydrates both keys from storage.
    ///
    /// The keys are independent: a problem with one does not affect the
    /// other. Malformed stored data is logged and replaced by defaults;
    /// nothing here is fatal.
    pub fn load(&mut self) {
        match self.adapter.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<StoredSettings>(&raw) {
                Ok(stored) => self.settings = EmailSettings::from_stored(stored),
                Err(err) => {
                    warn!(key = SETTINGS_KEY, error = %err, "stored settings unreadable, using defaults");
                }
            },
            Ok(None) => debug!(key = SETTINGS_KEY, "no stored settings, using defaults"),
            Err(err) => {
                warn!(key = SETTINGS_KEY, error = %err, "storage read failed, using defaults");
            }
        }

        match self.adapter.get(TEMPLATES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Template>>(&raw) {
                Ok(templates) => self.templates = templates,
                Err(err) => {
                    warn!(key = TEMPLATES_KEY, error = %err, "stored templates unreadable, using seed collection");
                }
            },
            Ok(None) => debug!(key = TEMPLATES_KEY, "no stored templates, using seed collection"),
            Err(err) => {
                warn!(key = TEMPLATES_KEY, error = %err, "storage read failed, using seed collection");
            }
        }
    }

    /// Replaces the in-memory settings and writes them through the adapter.
    ///
    /// On write failure the in-memory update stands; the caller decides how
    /// to tell the user.
    pub fn save_settings(&mut self, settings: EmailSettings) -> Result<(), PersistenceError> {
        self.settings = settings;
        let raw = serde_json::to_string(&self.settings)?;
        self.adapter.set(SETTINGS_KEY, &raw)?;
        debug!(key = SETTINGS_KEY, "settings saved");
        Ok(())
    }

    /// Replaces the in-memory template collection and writes it as one unit.
    pub fn save_templates(&mut self, templates: Vec<Template>) -> Result<(), PersistenceError> {
        self.templates = templates;
        let raw = serde_json::to_string(&self.templates)?;
        self.adapter.set(TEMPLATES_KEY, &raw)?;
        debug!(key = TEMPLATES_KEY, count = self.templates.len(), "templates saved");
        Ok(())
    }
}
