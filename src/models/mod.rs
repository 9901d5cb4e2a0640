// Core data models for Labl
// These types represent source mappings, label entries, and the error taxonomy

pub mod error;
pub mod label;

pub use error::*;
pub use label::*;
