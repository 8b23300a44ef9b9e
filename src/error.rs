/// Error types for recipe-pantry
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for recipe-pantry operations
#[derive(Error, Debug)]
pub enum PantryError {
    /// I/O errors (storage files, image reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Recipe not found in the store
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Invalid recipe data
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Image file could not be read
    #[error("Could not read image '{path}': {source}")]
    ImageRead {
        path: String,
        source: std::io::Error,
    },

    /// Configuration error (data directory, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for recipe-pantry operations
pub type Result<T> = std::result::Result<T, PantryError>;

/// Convert PantryError to a user-friendly error message
impl PantryError {
    pub fn user_message(&self) -> String {
        match self {
            PantryError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            PantryError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            PantryError::RecipeNotFound(id) => {
                format!(
                    "No recipe with id '{}'. Run 'recipe-pantry list' to see ids.",
                    id
                )
            }
            PantryError::InvalidRecipe(reason) => {
                format!("Invalid recipe: {}", reason)
            }
            PantryError::ImageRead { path, source } => {
                format!("Could not read image '{}': {}", path, source)
            }
            PantryError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            PantryError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = PantryError::RecipeNotFound("abc123".to_string());
        assert!(err.user_message().contains("abc123"));

        let err = PantryError::InvalidRecipe("missing name".to_string());
        assert!(err.user_message().contains("missing name"));
    }

    #[test]
    fn test_error_display() {
        let err = PantryError::RecipeNotFound("deadbeef".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Recipe not found"));
    }

    #[test]
    fn test_image_read_error_includes_path() {
        let err = PantryError::ImageRead {
            path: "/tmp/cake.png".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.user_message().contains("/tmp/cake.png"));
    }
}
