//! Domain layer: entities, geometry and the morphology tree contract
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod traits;

pub use arena::{ArenaNode, MorphologyArena};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use traits::MorphologyTree;
