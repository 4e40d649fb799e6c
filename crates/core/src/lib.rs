//! Domain types shared by the Easel crates.
//!
//! Nothing in here touches the network or the database: ids and timestamps,
//! the error taxonomy, the shape-list codec and request validation helpers.

pub mod error;
pub mod shapes;
pub mod types;
pub mod validation;
