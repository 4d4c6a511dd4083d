use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named item with an ordered list of ingredient strings.
///
/// Everything except `name` is optional on the wire, and a missing `name`
/// is kept as an empty string rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(
        rename = "publishedAt",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub published_at: Option<OffsetDateTime>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Recipe {
            name: name.into(),
            ingredients: Some(ingredients),
            ..Recipe::default()
        }
    }

    /// Ingredients in the order given, empty when the field was absent.
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }
}

/// Identity used to diff a rendered recipe list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecipeKey {
    Id(String),
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedRecipe {
    pub key: RecipeKey,
    pub recipe: Recipe,
}

/// Ordered recipes as returned by `GET /recipes`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct RecipeCollection(Vec<Recipe>);

impl RecipeCollection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One entry per recipe, in collection order. Server ids win, position is
    /// the fallback for recipes that arrive without one.
    pub fn keyed(&self) -> Vec<KeyedRecipe> {
        self.0
            .iter()
            .enumerate()
            .map(|(position, recipe)| KeyedRecipe {
                key: recipe
                    .id
                    .clone()
                    .map_or(RecipeKey::Position(position), RecipeKey::Id),
                recipe: recipe.clone(),
            })
            .collect()
    }

    pub fn into_inner(self) -> Vec<Recipe> {
        self.0
    }
}

impl From<Vec<Recipe>> for RecipeCollection {
    fn from(recipes: Vec<Recipe>) -> Self {
        RecipeCollection(recipes)
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
