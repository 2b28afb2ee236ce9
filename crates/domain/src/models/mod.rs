//! Domain models for the email campaign backend.

pub mod invitee;
pub mod settings;
pub mod template;

pub use invitee::{seed_invitees, EngagementStatus, Invitee, InviteeKind};
pub use settings::{EmailSettings, StoredSettings};
pub use template::{seed_templates, Template, TemplateDraft, ValidationError};
