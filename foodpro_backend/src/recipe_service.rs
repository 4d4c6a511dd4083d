use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use foodpro_model::Recipe;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error as ThisError;
use tracing::debug;

use crate::recipe_store::RecipeStore;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Recipe {0} not found")]
    NotFound(String),
}
type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

pub trait RecipeService {
    fn bind_recipe_routes(self, recipe_access: RecipeAccess) -> Self;
}

impl RecipeService for Router {
    fn bind_recipe_routes(self, recipe_access: RecipeAccess) -> Self {
        self.merge(
            Router::new()
                .route("/recipes", get(get_all))
                .route("/recipes/search", get(search))
                .route("/recipes/:id", get(get_one))
                .with_state(recipe_access),
        )
    }
}

#[derive(Debug, Clone)]
pub struct RecipeAccess {
    store: Arc<RecipeStore>,
}

impl RecipeAccess {
    pub fn new(store: RecipeStore) -> Self {
        RecipeAccess {
            store: Arc::new(store),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    tag: Option<String>,
}

pub(crate) async fn get_all(State(recipe_access): State<RecipeAccess>) -> Json<Vec<Recipe>> {
    let recipes = recipe_access.store.all().to_vec();
    debug!(count = recipes.len(), "serving all recipes");
    Json(recipes)
}

pub(crate) async fn get_one(
    State(recipe_access): State<RecipeAccess>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>> {
    recipe_access
        .store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(Error::NotFound(id))
}

pub(crate) async fn search(
    State(recipe_access): State<RecipeAccess>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Recipe>> {
    let recipes = match params.tag {
        Some(tag) => recipe_access
            .store
            .by_tag(&tag)
            .into_iter()
            .cloned()
            .collect(),
        None => vec![],
    };
    Json(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = RecipeStore::from_recipes(vec![
            Recipe {
                tags: Some(vec!["breakfast".into()]),
                ..Recipe::new("Pancakes", vec!["flour".into(), "milk".into()])
            },
            Recipe {
                id: Some("stew".into()),
                tags: Some(vec!["dinner".into()]),
                ..Recipe::new("Stew", vec!["beef".into()])
            },
        ]);
        Router::new().bind_recipe_routes(RecipeAccess::new(store))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_all_recipes_in_order() {
        let (status, body) = get_json("/recipes").await;
        assert_eq!(status, StatusCode::OK);
        let recipes: Vec<Recipe> = serde_json::from_value(body).unwrap();
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Pancakes", "Stew"]);
        assert_eq!(recipes[0].ingredients(), ["flour", "milk"]);
    }

    #[tokio::test]
    async fn fetches_one_by_id() {
        let (status, body) = get_json("/recipes/stew").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Stew");

        let (status, body) = get_json("/recipes/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Pancakes");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (status, body) = get_json("/recipes/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Recipe nope not found");
    }

    #[tokio::test]
    async fn searches_by_tag() {
        let (status, body) = get_json("/recipes/search?tag=dinner").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "Stew");
    }

    #[tokio::test]
    async fn search_without_tag_is_empty() {
        let (status, body) = get_json("/recipes/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
