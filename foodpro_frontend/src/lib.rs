pub mod api;
pub mod config;
pub mod loader;
pub mod recipe_list;
pub mod recipe_view;

use std::rc::Rc;

use sycamore::prelude::*;

use api::{HttpRecipeSource, RecipeSource};
use recipe_list::RecipeList;

/// Root of the page: the recipe list backed by the configured endpoint.
#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    let source: Rc<dyn RecipeSource> =
        Rc::new(HttpRecipeSource::new(config::recipes_endpoint()));
    view! { cx, RecipeList(source = source) }
}
