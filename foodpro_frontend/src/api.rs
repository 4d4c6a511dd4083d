use async_trait::async_trait;
use foodpro_model::RecipeCollection;
use gloo_net::http;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to do some HTTP: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("Bad response: {0}")]
    Http(String),
}

/// Where the recipe list comes from.
#[async_trait(?Send)]
pub trait RecipeSource {
    async fn fetch_recipes(&self) -> Result<RecipeCollection, Error>;
}

async fn response_http_err<T: DeserializeOwned>(resp: http::Response) -> Result<T, Error> {
    if !resp.ok() {
        let status = resp.status_text();
        let code = resp.status();
        let text = resp.text().await?;
        Err(Error::Http(format!("{status} {code} – {text}")))
    } else {
        Ok(resp.json::<T>().await?)
    }
}

/// Fetches `GET <endpoint>` with no headers, query or body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRecipeSource {
    endpoint: String,
}

impl HttpRecipeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpRecipeSource {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_recipes(&self) -> Result<RecipeCollection, Error> {
        let resp = http::Request::get(&self.endpoint).send().await?;
        response_http_err(resp).await
    }
}
