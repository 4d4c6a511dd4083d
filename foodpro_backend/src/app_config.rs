use config::{Config, ConfigError, File, FileFormat};

use serde::{Deserialize, Serialize};

use tracing::info;

pub const SERVER_HOST_ENV: &str = "FOODPRO_SERVER_HOST";
pub const SERVER_PORT_ENV: &str = "FOODPRO_SERVER_PORT";
pub const RECIPES_PATH_ENV: &str = "FOODPRO_RECIPES_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HTTPConfig {
    pub host: String,
    pub port: u16,
}

impl HTTPConfig {
    pub fn connection_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_age_secs: 12 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub http_config: HTTPConfig,
    pub store_config: StoreConfig,
    pub cors_config: CorsConfig,
}

impl AppConfig {
    /// Reads the TOML file at `path_str`, then applies `FOODPRO_*` overrides
    /// from the process environment.
    pub fn load(path_str: &str) -> Result<Self, ConfigError> {
        let mut conf = Config::default();
        conf.merge(File::new(path_str, FileFormat::Toml))?;
        let mut app_config = Self::from_config(&conf)?;
        app_config.apply_env(|key| std::env::var(key).ok())?;
        Ok(app_config)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let mut conf = Config::default();
        conf.merge(File::from_str(toml, FileFormat::Toml))?;
        Self::from_config(&conf)
    }

    fn from_config(conf: &Config) -> Result<Self, ConfigError> {
        let http_config = conf.get::<HTTPConfig>("http")?;
        let store_config = conf.get::<StoreConfig>("store")?;
        let cors_config = match conf.get::<CorsConfig>("cors") {
            Err(ConfigError::NotFound(_)) => {
                info!("no cors section, using defaults");
                CorsConfig::default()
            }
            other => other?,
        };
        Ok(AppConfig {
            http_config,
            store_config,
            cors_config,
        })
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(SERVER_HOST_ENV) {
            info!("getting server host from env: {host}");
            self.http_config.host = host;
        } else {
            info!("getting server host from file");
        }
        if let Some(port) = lookup(SERVER_PORT_ENV) {
            info!("getting server port from env: {port}");
            self.http_config.port = port.parse::<u16>().map_err(|_| {
                ConfigError::Message(format!("Failed to parse server port {port:?}"))
            })?;
        }
        if let Some(path) = lookup(RECIPES_PATH_ENV) {
            info!("recipes path from env: {path}");
            self.store_config.path = path;
        } else {
            info!("recipes path from file");
        }
        Ok(())
    }
}
