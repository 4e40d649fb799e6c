//! Startup seeding of the fixed demo accounts.

use crate::models::user::CreateUser;
use crate::repositories::UserRepo;
use crate::DbPool;

/// The accounts every fresh database starts with, as `(username, password)`.
pub const DEMO_USERS: [(&str, &str); 3] = [
    ("user1", "password1"),
    ("user2", "password2"),
    ("user3", "password3"),
];

/// Insert each demo user whose username is not already taken.
///
/// Safe to run on every startup. Returns the number of users inserted.
pub async fn seed_demo_users(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let mut inserted = 0;

    for (username, password) in DEMO_USERS {
        if UserRepo::exists_by_username(pool, username).await? {
            tracing::debug!(username, "Demo user already present");
            continue;
        }

        let input = CreateUser {
            username: username.to_string(),
            password: password.to_string(),
        };
        let user = UserRepo::create(pool, &input).await?;
        tracing::info!(user_id = user.id, username, "Seeded demo user");
        inserted += 1;
    }

    Ok(inserted)
}
