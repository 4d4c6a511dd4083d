pub mod app_config;
pub mod recipe_service;
pub mod recipe_store;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use thiserror::Error as ThisError;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use app_config::CorsConfig;
use recipe_service::{RecipeAccess, RecipeService};
use recipe_store::RecipeStore;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid CORS origin {0:?}")]
    InvalidOrigin(String),
}

/// Cross-origin rule for the browser front-end: read-only methods, the
/// configured origins, credentials allowed.
pub fn cors_layer(cors_config: &CorsConfig) -> Result<CorsLayer, Error> {
    let origins = cors_config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ORIGIN])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(cors_config.max_age_secs)))
}

pub fn app(store: RecipeStore, cors_config: &CorsConfig) -> Result<Router, Error> {
    Ok(Router::new()
        .bind_recipe_routes(RecipeAccess::new(store))
        .layer(cors_layer(cors_config)?)
        .layer(TraceLayer::new_for_http()))
}
