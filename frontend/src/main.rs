use foodpro_frontend::App;
use log::info;
use sycamore::prelude::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    info!(
        "Starting, recipes from {}",
        foodpro_frontend::config::recipes_endpoint()
    );

    sycamore::render(|cx| {
        view! { cx,
            App {}
        }
    });
}
