//! CRUD over paintings, always scoped to the owning user.

use easel_core::error::CoreError;
use easel_core::shapes::encode_shapes;
use easel_core::types::DbId;
use easel_core::validation::not_blank;
use easel_db::models::painting::{CreatePainting, PaintingView, UpdatePainting};
use easel_db::repositories::{PaintingRepo, UserRepo};
use easel_db::DbPool;
use serde_json::Value;

use crate::error::AppResult;

/// Name and shape list of a painting, as supplied by a client.
#[derive(Debug, Clone)]
pub struct PaintingInput {
    pub name: String,
    pub shapes: Vec<Value>,
}

impl PaintingInput {
    /// Check the name and encode the shapes for storage.
    fn into_stored(self) -> AppResult<(String, String)> {
        not_blank(&self.name)
            .map_err(|_| CoreError::Validation("Name is required".to_string()))?;
        let shapes = encode_shapes(&self.shapes)?;
        Ok((self.name, shapes))
    }
}

pub struct PaintingService;

impl PaintingService {
    /// All of a user's paintings, most recently updated first.
    ///
    /// An unknown user simply has no paintings.
    pub async fn list_for_user(pool: &DbPool, user_id: DbId) -> AppResult<Vec<PaintingView>> {
        PaintingRepo::list_by_user(pool, user_id)
            .await?
            .into_iter()
            .map(|painting| PaintingView::try_from(painting).map_err(Into::into))
            .collect()
    }

    /// One painting, if it exists and belongs to `user_id`.
    pub async fn get(pool: &DbPool, painting_id: DbId, user_id: DbId) -> AppResult<PaintingView> {
        let painting = PaintingRepo::find_by_id_and_user(pool, painting_id, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Painting",
                id: painting_id,
            })?;
        Ok(PaintingView::try_from(painting)?)
    }

    /// Store a new painting for an existing user.
    pub async fn create(
        pool: &DbPool,
        user_id: DbId,
        input: PaintingInput,
    ) -> AppResult<PaintingView> {
        UserRepo::find_by_id(pool, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        let (name, shapes) = input.into_stored()?;
        let painting = PaintingRepo::create(
            pool,
            &CreatePainting {
                user_id,
                name,
                shapes,
            },
        )
        .await?;

        tracing::info!(painting_id = painting.id, user_id, "Painting created");
        Ok(PaintingView::try_from(painting)?)
    }

    /// Replace a painting's name and shapes wholesale.
    pub async fn update(
        pool: &DbPool,
        painting_id: DbId,
        user_id: DbId,
        input: PaintingInput,
    ) -> AppResult<PaintingView> {
        let (name, shapes) = input.into_stored()?;
        let changes = UpdatePainting { name, shapes };
        let painting = PaintingRepo::update(pool, painting_id, user_id, &changes)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Painting",
                id: painting_id,
            })?;

        tracing::info!(painting_id, user_id, "Painting updated");
        Ok(PaintingView::try_from(painting)?)
    }

    /// Remove a painting owned by `user_id`.
    pub async fn delete(pool: &DbPool, painting_id: DbId, user_id: DbId) -> AppResult<()> {
        if !PaintingRepo::delete_by_id_and_user(pool, painting_id, user_id).await? {
            return Err(CoreError::NotFound {
                entity: "Painting",
                id: painting_id,
            }
            .into());
        }

        tracing::info!(painting_id, user_id, "Painting deleted");
        Ok(())
    }
}
