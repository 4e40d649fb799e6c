//! Repository for the `paintings` table.
//!
//! Every single-row query is scoped by both painting id and owner id, so a
//! painting is invisible to any user other than its owner.

use easel_core::types::{self, DbId};
use sqlx::SqlitePool;

use crate::models::painting::{CreatePainting, Painting, UpdatePainting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, user_id, shapes, created_at, updated_at";

/// Provides CRUD operations for paintings.
pub struct PaintingRepo;

impl PaintingRepo {
    /// Insert a new painting, stamping both timestamps with the current time.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePainting,
    ) -> Result<Painting, sqlx::Error> {
        let now = types::now();
        let query = format!(
            "INSERT INTO paintings (name, user_id, shapes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Painting>(&query)
            .bind(&input.name)
            .bind(input.user_id)
            .bind(&input.shapes)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List a user's paintings, most recently updated first.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Painting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM paintings
             WHERE user_id = ?1
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Painting>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a painting by ID, only if it belongs to `user_id`.
    pub async fn find_by_id_and_user(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Painting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paintings WHERE id = ?1 AND user_id = ?2");
        sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a painting's name and shapes and refresh `updated_at`.
    ///
    /// Returns `None` if no painting with `id` belongs to `user_id`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
        input: &UpdatePainting,
    ) -> Result<Option<Painting>, sqlx::Error> {
        let query = format!(
            "UPDATE paintings SET
                name = ?3,
                shapes = ?4,
                updated_at = ?5
             WHERE id = ?1 AND user_id = ?2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Painting>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.shapes)
            .bind(types::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a painting owned by `user_id`.
    ///
    /// The ownership check and the removal are one statement, so concurrent
    /// deletes never observe a half-applied check. Returns `false` (and
    /// deletes nothing) if the painting does not belong to the user.
    pub async fn delete_by_id_and_user(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM paintings WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of paintings owned by `user_id`.
    pub async fn count_by_user(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM paintings WHERE user_id = ?1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
