//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the matching service in
//! [`crate::services`] and map the outcome to a status code.

pub mod auth;
pub mod health;
pub mod painting;
