/// Storage layer
///
/// Key-value backends and the persisted recipe models.

pub mod backend;
pub mod models;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use models::{Recipe, RecipeInput};
