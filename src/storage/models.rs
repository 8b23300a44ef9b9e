/// Data models for persisted recipes
///
/// Recipes are stored as one JSON array under the "recipes" key, so the
/// decoders here are deliberately tolerant: data written by older versions
/// (or by hand) loads without aborting the whole collection.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single recipe record.
///
/// `id` is assigned at creation and stays stable for the record's lifetime;
/// all edit/delete/view operations key off it. Records persisted before ids
/// existed get a fresh one at load time via the serde default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    /// Free text, not a structured list
    #[serde(default)]
    pub ingredients: String,
    /// Ordered cooking steps; display order is cooking order
    #[serde(default, deserialize_with = "lenient_steps")]
    pub steps: Vec<String>,
    #[serde(default)]
    pub category: String,
    /// Empty string when no image was attached, otherwise an opaque
    /// `data:<mime>;base64,...` blob passed through untouched
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    /// Build a new recipe from user input, assigning a fresh id
    pub fn new(input: RecipeInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            ingredients: input.ingredients,
            steps: input.steps,
            category: input.category,
            image: input.image,
        }
    }

    /// Whether an image blob is attached
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Input for creating or re-submitting a recipe (everything but the id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: String,
    pub steps: Vec<String>,
    pub category: String,
    pub image: String,
}

/// Accept anything in the `steps` slot and coerce it to a list of strings.
///
/// A non-array value becomes the empty list; non-string elements inside an
/// array are dropped. Matches the load-time normalization the original data
/// requires (old records were observed with stringly-typed steps).
fn lenient_steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
