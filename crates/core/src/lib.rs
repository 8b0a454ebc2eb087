//! Shared types, errors, and pure helpers for the stockroom catalog backend.
//!
//! This crate has no internal dependencies so it can be used by the storage,
//! db, and API layers alike.

pub mod error;
pub mod naming;
pub mod pagination;
pub mod types;
pub mod validation;
