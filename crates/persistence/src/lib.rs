//! Persistence layer for the VBDA 2025 email campaign backend.
//!
//! This crate contains:
//! - The key-value storage boundary (`PersistenceAdapter`) and its adapters
//! - The `SettingsStore`, the canonical owner of settings and templates
//! - Persistence error types

pub mod adapter;
pub mod error;
pub mod store;

pub use adapter::{AdapterError, JsonFileAdapter, MemoryAdapter, PersistenceAdapter};
pub use error::PersistenceError;
pub use store::{SettingsStore, SETTINGS_KEY, TEMPLATES_KEY};
