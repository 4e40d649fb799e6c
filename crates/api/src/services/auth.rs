//! Username/password login against the `users` table.
//!
//! Passwords are stored and compared as plaintext. Painting endpoints do not
//! consult this service: they trust the user id in the request path.

use easel_core::error::CoreError;
use easel_db::models::user::UserView;
use easel_db::repositories::UserRepo;
use easel_db::DbPool;

use crate::error::AppResult;

pub struct AuthService;

impl AuthService {
    /// Look up `username` and compare `password` byte-for-byte.
    ///
    /// Fails with [`CoreError::UnknownUser`] when no such user exists and
    /// [`CoreError::InvalidCredentials`] on a mismatch.
    pub async fn authenticate(
        pool: &DbPool,
        username: &str,
        password: &str,
    ) -> AppResult<UserView> {
        let user = UserRepo::find_by_username(pool, username)
            .await?
            .ok_or_else(|| CoreError::UnknownUser(username.to_string()))?;

        if user.password != password {
            return Err(CoreError::InvalidCredentials.into());
        }

        Ok(user.into())
    }
}
