use std::future::Future;
use std::rc::Rc;

use foodpro_model::RecipeCollection;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::api::RecipeSource;
use crate::loader::RecipeListLoader;
use crate::recipe_view::RecipeView;

/// Replaces the whole collection once the fetch succeeds. A failed fetch
/// leaves whatever was there.
async fn populate<F>(load: F, recipes: &Signal<RecipeCollection>)
where
    F: Future<Output = Option<RecipeCollection>>,
{
    if let Some(loaded) = load.await {
        recipes.set(loaded);
    }
}

#[derive(Prop)]
pub struct RecipeListProps {
    pub source: Rc<dyn RecipeSource>,
}

/// Starts empty and fetches once in the browser. The fetch is tied to this
/// component's scope, so a response that arrives after unmount is dropped
/// together with the task.
#[component]
pub fn RecipeList<G: Html>(cx: Scope, props: RecipeListProps) -> View<G> {
    let recipes = create_signal(cx, RecipeCollection::default());
    let loader = create_ref(cx, RecipeListLoader::new(props.source));
    if G::IS_BROWSER {
        if let Some(load) = loader.activate() {
            spawn_local_scoped(cx, populate(load, recipes));
        }
    }
    view! { cx, RecipeListView(recipes = recipes) }
}

#[derive(Prop)]
pub struct RecipeListViewProps<'a> {
    pub recipes: &'a Signal<RecipeCollection>,
}

#[component]
pub fn RecipeListView<'a, G: Html>(cx: Scope<'a>, props: RecipeListViewProps<'a>) -> View<G> {
    let recipes = props.recipes;
    let entries = create_memo(cx, move || recipes.get().keyed());
    view! { cx,
        div(class = "recipes") {
            Keyed(
                iterable = entries,
                view = |cx, entry| view! { cx, RecipeView(recipe = entry.recipe) },
                key = |entry| entry.key.clone(),
            )
        }
    }
}
