use easel_db::models::user::{CreateUser, User};
use easel_db::repositories::UserRepo;
use easel_db::DbPool;

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = easel_db::create_memory_pool()
        .await
        .expect("in-memory pool should open");
    easel_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// File-backed database inside `dir`, with a multi-connection pool.
#[allow(dead_code)]
pub async fn file_pool(dir: &tempfile::TempDir) -> DbPool {
    let url = format!("sqlite://{}", dir.path().join("easel.db").display());
    let pool = easel_db::create_pool(&url)
        .await
        .expect("file pool should open");
    easel_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Insert a user with a throwaway password.
pub async fn create_user(pool: &DbPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        password: format!("{username}-secret"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}
