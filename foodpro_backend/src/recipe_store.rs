use std::path::Path;

use foodpro_model::{Recipe, RecipeCollection};
use thiserror::Error as ThisError;
use tracing::info;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to read recipes file: {0}")]
    IO(#[from] std::io::Error),
    #[error("Failed to parse recipes file: Serde Error: {0}")]
    Serde(#[from] serde_json::Error),
}
type Result<T> = std::result::Result<T, Error>;

/// Read-only recipes held in memory, in the order they were loaded.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Loads a JSON array of recipes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)?;
        let recipes = serde_json::from_str::<RecipeCollection>(&body)?;
        info!(path = %path.display(), count = recipes.len(), "loaded recipes");
        Ok(Self::from_recipes(recipes.into_inner()))
    }

    /// Recipes without an id get their 1-based position as one, so every
    /// served recipe can be addressed and keyed.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let recipes = recipes
            .into_iter()
            .enumerate()
            .map(|(position, mut recipe)| {
                if recipe.id.is_none() {
                    recipe.id = Some((position + 1).to_string());
                }
                recipe
            })
            .collect();
        RecipeStore { recipes }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id.as_deref() == Some(id))
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.has_tag(tag))
            .collect()
    }
}
