use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foodpro_backend::app_config::AppConfig;
use foodpro_backend::recipe_store::{self, RecipeStore};
use thiserror::Error as ThisError;

const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, ThisError)]
enum Error {
    #[error("foodpro failed to bind server with io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("foodpro failed to load config, Config Error {0}")]
    Confg(#[from] config::ConfigError),
    #[error("foodpro failed to load recipes: {0}")]
    Store(#[from] recipe_store::Error),
    #[error("foodpro failed to build app: {0}")]
    App(#[from] foodpro_backend::Error),
}
type Result<T> = std::result::Result<T, Error>;

/// Serves the recipe collection over HTTP.
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Path to the TOML config file
    #[clap(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let conf = AppConfig::load(&args.config)?;
    let store = RecipeStore::load(&conf.store_config.path)?;
    let app = foodpro_backend::app(store, &conf.cors_config)?;

    let host_port = conf.http_config.connection_string();
    let listener = TcpListener::bind(&host_port).await?;
    info!("Successfully bound server to {}", host_port);

    axum::serve(listener, app).await?;
    Ok(())
}
