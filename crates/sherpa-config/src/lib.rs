//! # sherpa-config
//!
//! Layered configuration loading for Standards Sherpa exports using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHERPA_*` prefix, `__` as separator)
//! 2. Project-level `.sherpa/config.toml`
//! 3. User-level `~/.config/sherpa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHERPA_EXPORT__OUTPUT_DIR` -> `export.output_dir`,
//! `SHERPA_PDF__FONT_SIZE` -> `pdf.font_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sherpa_config::SherpaConfig;
//!
//! let config = SherpaConfig::load_with_dotenv().expect("config");
//! println!("artifacts go to {}", config.export.output_dir);
//! ```

mod error;
mod export;
mod pdf;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use pdf::{PdfConfig, RUBRIC_COLUMNS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SherpaConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub pdf: PdfConfig,
}

impl SherpaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sherpa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SHERPA_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.export.validate()?;
        self.pdf.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sherpa").join("config.toml"))
    }
}
