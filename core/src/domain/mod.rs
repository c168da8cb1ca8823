//! Domain layer containing business entities and domain concepts.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
