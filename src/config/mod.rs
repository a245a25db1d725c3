//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RECOMMENDER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_CATALOG_URL, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_TOP_K};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RECOMMENDER_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// JSON catalog cache file. Default: `./.data/assessments.json`.
    pub catalog_path: PathBuf,

    /// Product listing scraped on a cache miss.
    pub catalog_url: String,

    /// Sentence model directory (config.json, tokenizer.json, model.safetensors).
    /// `None` runs the lexical stub embedder.
    pub model_path: Option<PathBuf>,

    /// Timeout for outbound HTTP requests, in seconds. Default: `10`.
    pub fetch_timeout_secs: u64,

    /// `top_k` used when a request omits it. Default: `10`.
    pub default_top_k: usize,

    /// Fall back to the built-in catalog when cache and listing both fail. Default: `true`.
    pub seed_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            catalog_path: PathBuf::from("./.data/assessments.json"),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            model_path: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            default_top_k: DEFAULT_TOP_K,
            seed_fallback: true,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "RECOMMENDER_PORT";
    const ENV_BIND_ADDR: &'static str = "RECOMMENDER_BIND_ADDR";
    const ENV_CATALOG_PATH: &'static str = "RECOMMENDER_CATALOG_PATH";
    const ENV_CATALOG_URL: &'static str = "RECOMMENDER_CATALOG_URL";
    const ENV_MODEL_PATH: &'static str = "RECOMMENDER_MODEL_PATH";
    const ENV_FETCH_TIMEOUT_SECS: &'static str = "RECOMMENDER_FETCH_TIMEOUT_SECS";
    const ENV_DEFAULT_TOP_K: &'static str = "RECOMMENDER_DEFAULT_TOP_K";
    const ENV_SEED_FALLBACK: &'static str = "RECOMMENDER_SEED_FALLBACK";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let catalog_path = Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let catalog_url = Self::parse_string_from_env(Self::ENV_CATALOG_URL, defaults.catalog_url);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let fetch_timeout_secs =
            Self::parse_number_from_env(Self::ENV_FETCH_TIMEOUT_SECS, defaults.fetch_timeout_secs)?;
        let default_top_k =
            Self::parse_number_from_env(Self::ENV_DEFAULT_TOP_K, defaults.default_top_k)?;
        let seed_fallback = Self::parse_bool_from_env(Self::ENV_SEED_FALLBACK, defaults.seed_fallback)?;

        Ok(Self {
            port,
            bind_addr,
            catalog_path,
            catalog_url,
            model_path,
            fetch_timeout_secs,
            default_top_k,
            seed_fallback,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.catalog_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.catalog_url.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_CATALOG_URL,
            });
        }

        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_FETCH_TIMEOUT_SECS,
            });
        }

        if self.default_top_k == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_DEFAULT_TOP_K,
            });
        }

        Ok(())
    }

    /// Address the server binds to. IPv6 addresses are bracketed when displayed.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Ok(value) = env::var(var_name) else {
            return Ok(default);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                name: var_name,
                value,
            }),
        }
    }
}
