use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Username lookups have no id to report.
    #[error("User not found")]
    UnknownUser(String),

    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Error processing shapes data: {0}")]
    Serialization(String),

    #[error("Error parsing shapes data: {0}")]
    Deserialization(String),
}
