//! Shape-list codec.
//!
//! A painting's shapes are stored as a single TEXT column holding a JSON
//! array. The elements are opaque: whatever the drawing client sent comes
//! back unchanged, and no schema is imposed on them.

use serde_json::Value;

use crate::error::CoreError;

/// Encode a shape list into its stored text form.
pub fn encode_shapes(shapes: &[Value]) -> Result<String, CoreError> {
    serde_json::to_string(shapes).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Decode stored text back into a shape list.
///
/// Fails with [`CoreError::Deserialization`] when the text is not valid JSON
/// or is valid JSON but not an array.
pub fn decode_shapes(text: &str) -> Result<Vec<Value>, CoreError> {
    serde_json::from_str::<Vec<Value>>(text).map_err(|e| CoreError::Deserialization(e.to_string()))
}
