//! Repository structs, one per table.
//!
//! Repositories are zero-sized; every method takes the pool explicitly and
//! returns raw `sqlx::Error`s for the caller to classify.

pub mod painting_repo;
pub mod user_repo;

pub use painting_repo::PaintingRepo;
pub use user_repo::UserRepo;
