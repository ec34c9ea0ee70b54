//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the user service and the HTTP gateway.

pub mod user;

pub use user::{user_not_found_message, User, UserRequestBody};
