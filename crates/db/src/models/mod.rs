//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Create*` / `Update*` inputs for writes
//! - A `Serialize` view that is safe to hand to API clients

pub mod painting;
pub mod user;
