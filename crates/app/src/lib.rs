//! Application layer for the VBDA 2025 email campaign backend.
//!
//! Wires the domain and persistence layers into user-facing workflows:
//! - `TemplateEditor`: the create/edit/delete lifecycle over the store's
//!   template collection
//! - `SettingsForm`: the edit/validate/save lifecycle for the settings
//!   record
//! - `ErrorBanner`: transient validation feedback with a cancelable
//!   auto-clear deadline
//! - runtime configuration and logging setup for the binary

pub mod banner;
pub mod config;
pub mod editor;
pub mod logging;
pub mod settings;

pub use banner::ErrorBanner;
pub use editor::{EditorMode, SaveOutcome, TemplateEditor};
pub use settings::{SettingsForm, SettingsSaveError};
