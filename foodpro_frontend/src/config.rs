pub const DEFAULT_RECIPES_ENDPOINT: &str = "http://localhost:8080/recipes";

/// The recipe collection endpoint. `FOODPRO_RECIPES_ENDPOINT` is read at
/// compile time since the bundle has no environment once it runs in a browser.
pub fn recipes_endpoint() -> &'static str {
    option_env!("FOODPRO_RECIPES_ENDPOINT").unwrap_or(DEFAULT_RECIPES_ENDPOINT)
}
