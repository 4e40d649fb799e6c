//! Domain services sitting between the HTTP handlers and the repositories.
//!
//! Services own the business rules (credential comparison, ownership
//! scoping, shape encoding) and report failures as [`AppError`] values;
//! they never decide HTTP status codes.
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod painting;

pub use auth::AuthService;
pub use painting::{PaintingInput, PaintingService};
