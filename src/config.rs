use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{CriterionId, CriterionWeight, WeightConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON catalog file. The bundled seed is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Default criterion weights, 0-100 each
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_camera_weight")]
    pub camera: u8,
    #[serde(default = "default_display_weight")]
    pub display: u8,
    #[serde(default = "default_ram_weight")]
    pub ram: u8,
    #[serde(default = "default_price_weight")]
    pub price: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            camera: default_camera_weight(),
            display: default_display_weight(),
            ram: default_ram_weight(),
            price: default_price_weight(),
        }
    }
}

impl From<&WeightsConfig> for WeightConfig {
    fn from(config: &WeightsConfig) -> Self {
        WeightConfig::new(vec![
            CriterionWeight::new(CriterionId::Camera, config.camera),
            CriterionWeight::new(CriterionId::Display, config.display),
            CriterionWeight::new(CriterionId::Ram, config.ram),
            CriterionWeight::new(CriterionId::Price, config.price),
        ])
    }
}

fn default_camera_weight() -> u8 { 30 }
fn default_display_weight() -> u8 { 25 }
fn default_ram_weight() -> u8 { 20 }
fn default_price_weight() -> u8 { 25 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PHONE_RANKER)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PHONE_RANKER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PHONE_RANKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PHONE_RANKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn default_weights(&self) -> WeightConfig {
        WeightConfig::from(&self.scoring.weights)
    }
}

/// Apply overrides from well-known, unprefixed environment variables
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = std::env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }
    if let Ok(port) = std::env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
