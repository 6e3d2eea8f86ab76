//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

use super::types::SiteConfig;

/// Loads and provides access to the site configuration.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/site.yaml").unwrap();
/// println!("upstream: {}", loader.config().api_base_url);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SiteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/site.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing, contains invalid YAML, or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&config, &path_str)?;

        Ok(Self { config })
    }

    fn validate(config: &SiteConfig, path: &str) -> RosterResult<()> {
        if config.shop_day_start_hour >= 24 {
            return Err(RosterError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "shop_day_start_hour must be 0-23, got {}",
                    config.shop_day_start_hour
                ),
            });
        }
        if config.api_base_url.is_empty() {
            return Err(RosterError::ConfigParseError {
                path: path.to_string(),
                message: "api_base_url must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the loaded site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
