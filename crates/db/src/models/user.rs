//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use easel_core::types::DbId;

/// Full user row from the `users` table.
///
/// Contains the plaintext password -- NEVER serialize this to API responses.
/// Use [`UserView`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
}

/// Public user representation (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub username: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// DTO for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}
