use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    /// One connection URL per storage partition, in partition index order.
    pub database_urls: Vec<String>,

    /// Shared secret expected in the `x-admin-token` header on admin routes.
    pub admin_token: String,

    /// Base URL of the node that issues IDs for the cluster. `None` means IDs are
    /// generated locally.
    pub id_root_url: Option<String>,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_urls = parse_database_urls(&required("DATABASE_URLS")?)?;

        Ok(Self {
            database_urls,
            admin_token: required("ADMIN_TOKEN")?,
            id_root_url: std::env::var("ID_ROOT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Splits the comma-separated partition list, dropping blank entries.
///
/// # Returns
/// - `Ok(Vec<String>)` - At least one partition URL
/// - `Err(ConfigError::InvalidEnvVar)` - The list contained no usable URL
fn parse_database_urls(raw: &str) -> Result<Vec<String>, ConfigError> {
    let urls: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: "DATABASE_URLS".to_string(),
            reason: "at least one partition URL is required".to_string(),
        });
    }

    Ok(urls)
}
