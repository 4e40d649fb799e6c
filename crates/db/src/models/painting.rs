//! Painting entity model and DTOs.

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use easel_core::error::CoreError;
use easel_core::shapes::decode_shapes;
use easel_core::types::{DbId, Timestamp};

/// A painting row from the `paintings` table.
///
/// `shapes` is the stored JSON text; decode it through [`PaintingView`].
#[derive(Debug, Clone, FromRow)]
pub struct Painting {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub shapes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read projection of a painting with its shape list decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintingView {
    pub id: DbId,
    pub name: String,
    pub shapes: Vec<Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<Painting> for PaintingView {
    type Error = CoreError;

    fn try_from(painting: Painting) -> Result<Self, Self::Error> {
        Ok(Self {
            shapes: decode_shapes(&painting.shapes)?,
            id: painting.id,
            name: painting.name,
            created_at: painting.created_at,
            updated_at: painting.updated_at,
        })
    }
}

/// DTO for inserting a painting. `shapes` is already encoded.
#[derive(Debug, Clone)]
pub struct CreatePainting {
    pub user_id: DbId,
    pub name: String,
    pub shapes: String,
}

/// DTO for replacing a painting's content. Both fields are written.
#[derive(Debug, Clone)]
pub struct UpdatePainting {
    pub name: String,
    pub shapes: String,
}
