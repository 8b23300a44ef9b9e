/// Recipe search
///
/// Case-insensitive substring match across name, ingredients, and category.
/// Deliberately not fuzzy: "dr" should match "drink", not "bread dough"
/// scored by edit distance.

use crate::storage::Recipe;

/// Handles recipe filtering for the search box
pub struct Searcher;

impl Searcher {
    /// Whether a recipe matches the query.
    ///
    /// The lowercased query must be a substring of the lowercased name,
    /// ingredients, or category. The empty query matches everything.
    pub fn matches(recipe: &Recipe, query: &str) -> bool {
        let query = query.to_lowercase();

        recipe.name.to_lowercase().contains(&query)
            || recipe.ingredients.to_lowercase().contains(&query)
            || recipe.category.to_lowercase().contains(&query)
    }

    /// Filter recipes down to those matching the query, order preserved
    pub fn filter<'a, I>(recipes: I, query: &str) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        recipes
            .into_iter()
            .filter(|recipe| Self::matches(recipe, query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecipeInput;

    fn recipe(name: &str, ingredients: &str, category: &str) -> Recipe {
        Recipe::new(RecipeInput {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            steps: Vec::new(),
            category: category.to_string(),
            image: String::new(),
        })
    }

    #[test]
    fn test_matches_by_category_substring() {
        let tea = recipe("Tea", "water,leaves", "drink");
        let soup = recipe("Soup", "stock", "food");

        assert!(Searcher::matches(&tea, "dr"));
        assert!(!Searcher::matches(&soup, "dr"));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let soup = recipe("Soup", "stock", "food");
        assert!(Searcher::matches(&soup, "SOUP"));
    }

    #[test]
    fn test_matches_by_ingredients() {
        let tea = recipe("Tea", "water,leaves", "drink");
        assert!(Searcher::matches(&tea, "leaves"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let tea = recipe("Tea", "", "drink");
        assert!(Searcher::matches(&tea, ""));
    }

    #[test]
    fn test_filter_preserves_order() {
        let recipes = vec![
            recipe("Apple Pie", "apples", "dessert"),
            recipe("Tea", "water", "drink"),
            recipe("Applesauce", "apples", "side"),
        ];

        let results = Searcher::filter(&recipes, "apple");
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Pie", "Applesauce"]);
    }

    #[test]
    fn test_filter_no_match() {
        let recipes = vec![recipe("Tea", "water", "drink")];
        assert!(Searcher::filter(&recipes, "zz").is_empty());
    }
}
