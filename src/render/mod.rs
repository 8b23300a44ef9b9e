/// Plain-text rendering of recipe lists and detail views
///
/// Every render produces the full output from scratch; there is no
/// incremental state to get out of sync with the store.

use crate::storage::Recipe;

/// Shown in the detail view when a recipe has no image attached
pub const PLACEHOLDER_IMAGE: &str = "default-image.png";

const SEPARATOR_WIDTH: usize = 60;

/// Renders recipes for the terminal
pub struct Renderer;

impl Renderer {
    /// Render the full recipe list.
    ///
    /// Each block carries the recipe's stable id, which is what the
    /// edit/delete/view commands take. Ids never go stale between renders
    /// the way positional indices would.
    pub fn render(recipes: &[&Recipe]) -> String {
        if recipes.is_empty() {
            return "No recipes found.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));

        for (i, recipe) in recipes.iter().enumerate() {
            out.push_str(&format!("{:3}. {}\n", i + 1, recipe.name));
            out.push_str(&format!("     Ingredients: {}\n", recipe.ingredients));
            out.push_str(&format!("     Steps: {}\n", recipe.steps.join(", ")));
            out.push_str(&format!("     Category: {}\n", recipe.category));
            out.push_str(&format!(
                "     edit / delete / view --> id {}\n",
                recipe.id
            ));
        }

        out.push_str(&format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));
        out
    }

    /// Render a single recipe's detail view
    pub fn render_detail(recipe: &Recipe) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));
        out.push_str(&format!("{}\n", recipe.name));
        out.push_str(&format!("Image: {}\n", Self::image_ref(recipe)));
        out.push_str(&format!("Ingredients: {}\n", recipe.ingredients));
        out.push_str(&format!("Steps: {}\n", recipe.steps.join(", ")));
        out.push_str(&format!("Category: {}\n", recipe.category));
        out.push_str(&format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));
        out
    }

    /// Displayable reference for the image field.
    ///
    /// Empty → the placeholder. An attached data URL is shortened to its
    /// header; nobody wants a screenful of base64.
    fn image_ref(recipe: &Recipe) -> String {
        if !recipe.has_image() {
            return PLACEHOLDER_IMAGE.to_string();
        }

        match recipe.image.split_once(',') {
            Some((header, _)) => format!("{},... ({} chars)", header, recipe.image.len()),
            None => recipe.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecipeInput;

    fn tea() -> Recipe {
        Recipe::new(RecipeInput {
            name: "Tea".to_string(),
            ingredients: "water,leaves".to_string(),
            steps: vec!["boil".to_string(), "steep".to_string()],
            category: "drink".to_string(),
            image: String::new(),
        })
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(Renderer::render(&[]), "No recipes found.\n");
    }

    #[test]
    fn test_render_shows_fields_and_id() {
        let recipe = tea();
        let out = Renderer::render(&[&recipe]);

        assert!(out.contains("Tea"));
        assert!(out.contains("water,leaves"));
        assert!(out.contains("boil, steep"));
        assert!(out.contains("drink"));
        assert!(out.contains(&recipe.id.to_string()));
    }

    #[test]
    fn test_detail_placeholder_for_missing_image() {
        let out = Renderer::render_detail(&tea());
        assert!(out.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_detail_shortens_data_url() {
        let mut recipe = tea();
        recipe.image = "data:image/png;base64,AAAA".to_string();

        let out = Renderer::render_detail(&recipe);
        assert!(out.contains("data:image/png;base64,..."));
        assert!(!out.contains("base64,AAAA"));
    }

    #[test]
    fn test_steps_joined_with_comma_space() {
        let out = Renderer::render_detail(&tea());
        assert!(out.contains("Steps: boil, steep"));
    }
}
