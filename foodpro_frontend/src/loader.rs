use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use foodpro_model::RecipeCollection;
use log::{debug, warn};

use crate::api::RecipeSource;

/// Fetches the recipe collection at most once per instance.
///
/// The instance lives as long as the component that owns it, so the flag
/// survives re-renders and is gone with the component. Everything runs on
/// one thread, so a plain `Cell` check-and-set is enough.
pub struct RecipeListLoader {
    source: Rc<dyn RecipeSource>,
    fetched: Cell<bool>,
}

impl RecipeListLoader {
    pub fn new(source: Rc<dyn RecipeSource>) -> Self {
        RecipeListLoader {
            source,
            fetched: Cell::new(false),
        }
    }

    /// Claims the single fetch for this instance. Returns the fetch on the
    /// first call and `None` on every call after that, no matter whether the
    /// first fetch has finished yet.
    pub fn activate(&self) -> Option<impl Future<Output = Option<RecipeCollection>> + '_> {
        if self.fetched.replace(true) {
            debug!("Recipes already requested, skipping activation");
            return None;
        }
        Some(self.fetch())
    }

    /// Failures end here: they are logged and turn into `None`.
    async fn fetch(&self) -> Option<RecipeCollection> {
        match self.source.fetch_recipes().await {
            Ok(recipes) => {
                debug!("Loaded {} recipes", recipes.len());
                Some(recipes)
            }
            Err(err) => {
                warn!("Failed to load recipes: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::Error;
    use async_trait::async_trait;
    use foodpro_model::Recipe;
    use futures::executor::block_on;

    enum Outcome {
        Recipes(RecipeCollection),
        Unavailable,
        Malformed,
    }

    /// Serves a fixed outcome and counts how often it was asked.
    pub(crate) struct FakeSource {
        pub(crate) calls: Cell<usize>,
        outcome: Outcome,
    }

    impl FakeSource {
        fn with(outcome: Outcome) -> Rc<Self> {
            Rc::new(FakeSource {
                calls: Cell::new(0),
                outcome,
            })
        }

        pub(crate) fn ok(recipes: Vec<Recipe>) -> Rc<Self> {
            Self::with(Outcome::Recipes(recipes.into()))
        }

        /// Non-2xx response.
        pub(crate) fn failing() -> Rc<Self> {
            Self::with(Outcome::Unavailable)
        }

        /// 200 with a body that is not a recipe array.
        pub(crate) fn malformed() -> Rc<Self> {
            Self::with(Outcome::Malformed)
        }
    }

    #[async_trait(?Send)]
    impl RecipeSource for FakeSource {
        async fn fetch_recipes(&self) -> Result<RecipeCollection, Error> {
            self.calls.set(self.calls.get() + 1);
            match &self.outcome {
                Outcome::Recipes(recipes) => Ok(recipes.clone()),
                Outcome::Unavailable => {
                    Err(Error::Http("Service Unavailable 503 – down".to_string()))
                }
                Outcome::Malformed => {
                    let parse_err = serde_json::from_str::<RecipeCollection>("<html>")
                        .expect_err("html is not json");
                    Err(Error::Request(gloo_net::Error::SerdeError(parse_err)))
                }
            }
        }
    }

    #[test]
    fn second_activation_issues_no_request() {
        let source = FakeSource::ok(vec![Recipe::new("Pancakes", vec!["flour".into()])]);
        let loader = RecipeListLoader::new(source.clone());

        let first = loader.activate();
        let second = loader.activate();
        assert!(first.is_some());
        assert!(second.is_none());

        let loaded = block_on(first.unwrap()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loader.activate().is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn failed_fetch_yields_nothing_and_is_not_retried() {
        let source = FakeSource::failing();
        let loader = RecipeListLoader::new(source.clone());

        assert_eq!(block_on(loader.activate().unwrap()), None);
        assert!(loader.activate().is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn malformed_body_is_swallowed_like_any_failure() {
        let source = FakeSource::malformed();
        let loader = RecipeListLoader::new(source.clone());

        assert_eq!(block_on(loader.activate().unwrap()), None);
        assert!(loader.activate().is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn failure_kinds_describe_their_cause() {
        let http = Error::Http("Not Found 404 – missing".to_string());
        assert_eq!(http.to_string(), "Bad response: Not Found 404 – missing");

        let parse_err = serde_json::from_str::<RecipeCollection>("{").unwrap_err();
        let request = Error::from(gloo_net::Error::from(parse_err));
        assert!(matches!(request, Error::Request(gloo_net::Error::SerdeError(_))));
        assert!(request.to_string().starts_with("Failed to do some HTTP: "));
    }

    #[test]
    fn empty_response_is_an_empty_collection() {
        let source = FakeSource::ok(vec![]);
        let loader = RecipeListLoader::new(source);

        let loaded = block_on(loader.activate().unwrap()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn nothing_is_requested_before_activation() {
        let source = FakeSource::ok(vec![]);
        let _loader = RecipeListLoader::new(source.clone());
        assert_eq!(source.calls.get(), 0);
    }
}
