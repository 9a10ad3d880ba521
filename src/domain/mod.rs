//! Domain layer: entities and merge rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no HTTP).

pub mod entities;
pub mod error;

pub use entities::*;
pub use error::DomainError;
