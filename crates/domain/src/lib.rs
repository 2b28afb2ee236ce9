//! Domain layer for the VBDA 2025 email campaign backend.
//!
//! This crate contains:
//! - Domain models (EmailSettings, Template, Invitee)
//! - Business logic services (follow-up roster filtering and selection)
//! - Domain error types

pub mod models;
pub mod services;
