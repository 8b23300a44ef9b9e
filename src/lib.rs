/// recipe-pantry library
///
/// Core functionality for the local recipe manager.

pub mod core;
pub mod error;
pub mod render;
pub mod storage;

// Re-exports for convenience
pub use crate::core::RecipeStore;
pub use error::{PantryError, Result};
pub use storage::{FileBackend, KvBackend, MemoryBackend, Recipe, RecipeInput};
