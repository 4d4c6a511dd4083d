use foodpro_model::Recipe;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct RecipeViewProps {
    pub recipe: Recipe,
}

/// Name as a heading, then one list item per ingredient. Whatever arrives is
/// rendered as-is.
#[component]
pub fn RecipeView<G: Html>(cx: Scope, props: RecipeViewProps) -> View<G> {
    let Recipe {
        name, ingredients, ..
    } = props.recipe;
    let ingredients = create_signal(cx, ingredients.unwrap_or_default());
    view! { cx,
        div(class = "recipe") {
            h4 { (name) }
            ul {
                Indexed(
                    iterable = ingredients,
                    view = |cx, ingredient| view! { cx, li { (ingredient) } },
                )
            }
        }
    }
}
