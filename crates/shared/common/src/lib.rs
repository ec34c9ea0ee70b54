//! Common utilities shared across the workspace.
//!
//! This crate provides unified error handling and its HTTP mapping.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
