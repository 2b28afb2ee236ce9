//! Email template domain model.
//!
//! Templates form an ordered collection (display order = creation order)
//! persisted as one unit under the `emailTemplates` key.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A named, reusable block of email markup with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique within the collection; time-derived on creation.
    pub id: i64,
    pub name: String,
    /// HTML body of the template.
    pub content: String,
}

/// Validation failure for a template draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a template name.")]
    MissingName,
    #[error("Please provide template content.")]
    MissingContent,
}

/// The edit buffer for creating or updating a single template.
///
/// Holds whatever the user has typed; both fields must be non-empty before
/// the draft can be saved into the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: String,
    pub content: String,
}

impl TemplateDraft {
    /// Checks that both name and content are present.
    ///
    /// Runs synchronously before any save; the collection is never touched
    /// by an invalid draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.content.clear();
    }
}

impl Template {
    /// Generates a fresh id for a new template.
    ///
    /// Time-based (milliseconds since epoch) like the original ids, but
    /// clamped strictly above every existing id so uniqueness holds even if
    /// the clock regresses or two templates are created within the same
    /// millisecond.
    pub fn next_id(existing: &[Template]) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match existing.iter().map(|t| t.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

/// The built-in template collection used when nothing has been saved yet.
pub fn seed_templates() -> Vec<Template> {
    vec![
        Template {
            id: 1,
            name: "Initial Invitation".to_string(),
            content: "<p>Dear {Recipient Name},</p><p>We are pleased to invite you to VBDA 2025...</p>".to_string(),
        },
        Template {
            id: 2,
            name: "Follow-up Reminder".to_string(),
            content: "<p>Dear {Recipient Name},</p><p>We noticed you haven't responded to our invitation...</p>".to_string(),
        },
        Template {
            id: 3,
            name: "Event Details".to_string(),
            content: "<p>Dear {Recipient Name},</p><p>Here are the details for the upcoming VBDA 2025 event...</p>".to_string(),
        },
        Template {
            id: 4,
            name: "Thank You".to_string(),
            content: "<p>Dear {Recipient Name},</p><p>Thank you for confirming your attendance to VBDA 2025...</p>".to_string(),
        },
    ]
}
