//! Settings editing workflow.
//!
//! Holds the working copy of the settings record while the user edits it,
//! validates it, and pushes it through the store on an explicit save action.
//! The store itself stays permissive; range and address checks live here.

use domain::models::EmailSettings;
use persistence::{PersistenceAdapter, PersistenceError, SettingsStore};
use thiserror::Error;
use tracing::{debug, error};
use validator::Validate;

/// Failure of an explicit settings save action.
#[derive(Debug, Error)]
pub enum SettingsSaveError {
    /// The edited record violates a field constraint; nothing was saved.
    #[error("invalid settings: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// The write failed; the in-memory edit stands and the user may retry.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Working copy of the settings record for the settings form.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    edited: EmailSettings,
}

impl SettingsForm {
    /// Starts a form from the store's current settings.
    pub fn from_store<A: PersistenceAdapter>(store: &SettingsStore<A>) -> Self {
        Self {
            edited: store.settings().clone(),
        }
    }

    pub fn settings(&self) -> &EmailSettings {
        &self.edited
    }

    /// Mutable access for field edits.
    pub fn settings_mut(&mut self) -> &mut EmailSettings {
        &mut self.edited
    }

    /// Validates the edited record and saves it through the store.
    pub fn save<A: PersistenceAdapter>(
        &self,
        store: &mut SettingsStore<A>,
    ) -> Result<(), SettingsSaveError> {
        self.edited.validate()?;
        match store.save_settings(self.edited.clone()) {
            Ok(()) => {
                debug!("settings saved");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to persist settings");
                Err(err.into())
            }
        }
    }
}
