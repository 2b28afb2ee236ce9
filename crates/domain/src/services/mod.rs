//! Domain services for the email campaign backend.
//!
//! Services contain business logic that operates on domain models.

pub mod followup;

pub use followup::{filter_invitees, CategoryFilter, FollowUpSelection};
