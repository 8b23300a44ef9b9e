// The recipe store: in-memory collection + write-through persistence
//
// Every mutation rewrites the whole collection under one key. That sounds
// wasteful but the collection is a personal recipe box, not a warehouse,
// and it keeps the storage contract down to get/set.

use crate::core::search::Searcher;
use crate::error::{PantryError, Result};
use crate::storage::{KvBackend, Recipe, RecipeInput};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Storage key the whole collection lives under
pub const RECIPES_KEY: &str = "recipes";

/// In-memory recipe collection backed by a key-value store.
///
/// Records are keyed by stable id; a separate ordering list preserves
/// insertion order for display. Loaded once, then kept in sync with the
/// backend by write-through on every mutation.
pub struct RecipeStore {
    backend: Arc<dyn KvBackend>,
    recipes: HashMap<Uuid, Recipe>,
    order: Vec<Uuid>,
}

impl RecipeStore {
    /// Load the collection from the backend.
    ///
    /// A missing or unparsable stored value yields an empty store; bad data
    /// never blocks startup. Field-level oddities (non-array steps, missing
    /// ids) are normalized by the model decoders.
    ///
    /// # Arguments
    /// * `backend` - The key-value store to load from and write through to
    ///
    /// # Returns
    /// * `Ok(RecipeStore)` - The loaded store
    /// * `Err(PantryError)` - If the backend itself fails to read
    pub fn load(backend: Arc<dyn KvBackend>) -> Result<Self> {
        let loaded: Vec<Recipe> = match backend.get(RECIPES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };

        let mut recipes = HashMap::new();
        let mut order = Vec::new();
        for recipe in loaded {
            // Duplicate ids shouldn't happen, but hand-edited files exist
            if !recipes.contains_key(&recipe.id) {
                order.push(recipe.id);
                recipes.insert(recipe.id, recipe);
            }
        }

        Ok(Self {
            backend,
            recipes,
            order,
        })
    }

    /// Add a new recipe to the end of the collection.
    ///
    /// Always succeeds in memory; the only failure mode is the write-through.
    ///
    /// # Returns
    /// * `Ok(Uuid)` - The id assigned to the new recipe
    pub fn add(&mut self, input: RecipeInput) -> Result<Uuid> {
        let recipe = Recipe::new(input);
        let id = recipe.id;

        self.order.push(id);
        self.recipes.insert(id, recipe);
        self.save_all()?;

        Ok(id)
    }

    /// Remove a recipe by id, preserving the order of the rest.
    ///
    /// # Returns
    /// * `Ok(Recipe)` - The removed record
    /// * `Err(PantryError::RecipeNotFound)` - If no recipe has that id
    pub fn delete(&mut self, id: Uuid) -> Result<Recipe> {
        let recipe = self
            .recipes
            .remove(&id)
            .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))?;

        self.order.retain(|entry| *entry != id);
        self.save_all()?;

        Ok(recipe)
    }

    /// Get a copy of a recipe for prefilling an edit.
    ///
    /// Non-destructive: the stored record is untouched until `commit_edit`,
    /// so an abandoned edit loses nothing.
    pub fn begin_edit(&self, id: Uuid) -> Result<Recipe> {
        self.recipes
            .get(&id)
            .cloned()
            .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))
    }

    /// Replace a recipe's fields with resubmitted input.
    ///
    /// The record keeps its id and its position in the display order.
    pub fn commit_edit(&mut self, id: Uuid, input: RecipeInput) -> Result<()> {
        let recipe = self
            .recipes
            .get_mut(&id)
            .ok_or_else(|| PantryError::RecipeNotFound(id.to_string()))?;

        recipe.name = input.name;
        recipe.ingredients = input.ingredients;
        recipe.steps = input.steps;
        recipe.category = input.category;
        recipe.image = input.image;

        self.save_all()
    }

    /// Look up a recipe by id
    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    /// All recipes in display order
    pub fn list(&self) -> Vec<&Recipe> {
        self.order
            .iter()
            .filter_map(|id| self.recipes.get(id))
            .collect()
    }

    /// Recipes whose name, ingredients, or category contain the query.
    ///
    /// Case-insensitive substring match, order preserved, non-mutating.
    pub fn filter(&self, query: &str) -> Vec<&Recipe> {
        Searcher::filter(self.list(), query)
    }

    /// Number of recipes in the store
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no recipes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Serialize the full collection and overwrite the stored value.
    ///
    /// Called after every mutation; calling it again without a mutation
    /// writes the identical value.
    pub fn save_all(&self) -> Result<()> {
        let ordered = self.list();
        let encoded = serde_json::to_string(&ordered)?;
        self.backend.set(RECIPES_KEY, &encoded)
    }
}
