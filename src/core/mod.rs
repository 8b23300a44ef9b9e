/// Core functionality modules
///
/// Contains the main business logic for recipe storage, editing,
/// searching, and image intake.

pub mod image_loader;
pub mod search;
pub mod store;

pub use search::Searcher;
pub use store::RecipeStore;
