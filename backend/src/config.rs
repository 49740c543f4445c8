//! Configuration management for the Lychee Guard service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LYCHEE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Image analysis limits
    pub analysis: AnalysisConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Longer image edge after downscaling
    pub max_edge_px: u32,

    /// Largest accepted image upload (encoded bytes)
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allow requests from any origin (dashboard dev servers)
    pub allow_any_origin: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("LYCHEE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("analysis.max_edge_px", i64::from(shared::DEFAULT_MAX_EDGE))?
            .set_default(
                "analysis.max_upload_bytes",
                AnalysisConfig::DEFAULT_MAX_UPLOAD_BYTES as i64,
            )?
            .set_default("cors.allow_any_origin", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LYCHEE_ prefix)
            .add_source(
                Environment::with_prefix("LYCHEE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
            cors: CorsConfig {
                allow_any_origin: true,
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_edge_px: shared::DEFAULT_MAX_EDGE,
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
