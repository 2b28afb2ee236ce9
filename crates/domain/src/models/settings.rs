//! Email settings domain model.
//!
//! The singleton configuration record governing sender identity, signature,
//! and automation toggles. Every field carries a hardcoded default so a load
//! from an empty or partial store always resolves to a complete record.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Canonical email campaign settings.
///
/// Serialized with camelCase keys to stay compatible with the stored
/// `emailSettings` JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    /// Display name used in the From header.
    pub sender_name: String,
    #[validate(email(message = "Sender email must be a valid address"))]
    pub sender_email: String,
    #[validate(email(message = "Reply-to email must be a valid address"))]
    pub reply_to_email: String,
    /// HTML signature appended to outgoing emails.
    pub email_signature: String,
    /// Enable AI content optimization.
    pub ai_assist_enabled: bool,
    /// Enable automatic follow-up emails.
    pub auto_follow_up_enabled: bool,
    /// Days before the first follow-up.
    #[validate(range(min = 1, max = 14, message = "Follow-up delay must be 1-14 days"))]
    pub follow_up_delay: u32,
    /// Maximum number of follow-ups per recipient.
    #[validate(range(min = 1, max = 5, message = "Maximum follow-ups must be 1-5"))]
    pub max_follow_ups: u32,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            sender_name: default_sender_name(),
            sender_email: default_sender_email(),
            reply_to_email: default_reply_to_email(),
            email_signature: default_email_signature(),
            ai_assist_enabled: true,
            auto_follow_up_enabled: true,
            follow_up_delay: default_follow_up_delay(),
            max_follow_ups: default_max_follow_ups(),
        }
    }
}

/// A partially-populated settings record as read from storage.
///
/// Older saved documents may be missing fields; merging is per-field, so an
/// explicitly stored value is always kept and only absent fields fall back
/// to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub reply_to_email: Option<String>,
    pub email_signature: Option<String>,
    pub ai_assist_enabled: Option<bool>,
    pub auto_follow_up_enabled: Option<bool>,
    pub follow_up_delay: Option<u32>,
    pub max_follow_ups: Option<u32>,
}

impl EmailSettings {
    /// Merges a stored record over the built-in defaults.
    pub fn from_stored(stored: StoredSettings) -> Self {
        Self {
            sender_name: stored.sender_name.unwrap_or_else(default_sender_name),
            sender_email: stored.sender_email.unwrap_or_else(default_sender_email),
            reply_to_email: stored.reply_to_email.unwrap_or_else(default_reply_to_email),
            email_signature: stored
                .email_signature
                .unwrap_or_else(default_email_signature),
            ai_assist_enabled: stored.ai_assist_enabled.unwrap_or(true),
            auto_follow_up_enabled: stored.auto_follow_up_enabled.unwrap_or(true),
            follow_up_delay: stored.follow_up_delay.unwrap_or_else(default_follow_up_delay),
            max_follow_ups: stored.max_follow_ups.unwrap_or_else(default_max_follow_ups),
        }
    }
}

// Default value functions
fn default_sender_name() -> String {
    "VBDA 2025 Team".to_string()
}
fn default_sender_email() -> String {
    "info@vbda2025.com".to_string()
}
fn default_reply_to_email() -> String {
    "support@vbda2025.com".to_string()
}
fn default_email_signature() -> String {
    "<p>Best regards,<br>VBDA 2025 Team</p>".to_string()
}
fn default_follow_up_delay() -> u32 {
    3
}
fn default_max_follow_ups() -> u32 {
    2
}
