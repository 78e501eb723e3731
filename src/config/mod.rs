use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::short_id::{DigestAlgorithm, ShortIdGenerator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub server: ServerConfig,
    /// Prefix joined with the short id to build short URLs (may be empty)
    pub base_url: String,
    pub short_id: ShortIdConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub table_name: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShortIdConfig {
    pub algorithm: DigestAlgorithm,
    pub length: usize,
}

impl StoreConfig {
    const fn default_max_connections() -> u32 {
        5
    }

    const fn default_connect_timeout_secs() -> u64 {
        5
    }
}

impl ShortIdConfig {
    pub const DEFAULT_LENGTH: usize = 6;
}

impl Default for ShortIdConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Md5,
            length: Self::DEFAULT_LENGTH,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .filter(|v| !v.trim().is_empty())
            .context("TABLE_NAME must be set")?;

        let base_url = lookup("BASE_URL").unwrap_or_default();

        let backend_str = lookup("STORE_BACKEND").unwrap_or_else(|| "sqlite".to_string());
        let backend = match backend_str.to_lowercase().as_str() {
            "sqlite" => StoreBackend::Sqlite,
            "postgres" | "postgresql" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                tracing::warn!(
                    "Unknown STORE_BACKEND '{other}', falling back to 'sqlite'. Supported values: sqlite, postgres, memory"
                );
                StoreBackend::Sqlite
            }
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://./linkhash.db".to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS '{v}'"))?,
            None => StoreConfig::default_max_connections(),
        };

        let connect_timeout_secs = match lookup("STORE_CONNECT_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("invalid STORE_CONNECT_TIMEOUT_SECS '{v}'"))?,
            None => StoreConfig::default_connect_timeout_secs(),
        };

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("invalid PORT")?;

        let algorithm = match lookup("SHORT_ID_DIGEST") {
            Some(v) => v.parse::<DigestAlgorithm>()?,
            None => DigestAlgorithm::Md5,
        };

        let length = match lookup("SHORT_ID_LENGTH") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("invalid SHORT_ID_LENGTH '{v}'"))?,
            None => ShortIdConfig::DEFAULT_LENGTH,
        };
        ShortIdGenerator::new(algorithm, length).context("invalid SHORT_ID_LENGTH")?;

        Ok(Config {
            store: StoreConfig {
                backend,
                url: database_url,
                table_name,
                max_connections,
                connect_timeout_secs,
            },
            server: ServerConfig { host, port },
            base_url,
            short_id: ShortIdConfig { algorithm, length },
        })
    }
}
