//! Rendering defaults loaded from configuration.
//!
//! [`RenderConfig`] carries the table-level defaults that
//! [`TableBuilder`](crate::table::TableBuilder) seeds into the columns it
//! generates. `RenderConfig::load()` reads `config/config.toml` when
//! present and overlays `COLONNADE`-prefixed environment variables, falling
//! back to environment-only when the file is unreadable. The compiled-in
//! defaults apply when no source mentions rendering at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Table-level rendering defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Placeholder for cells with nothing to show.
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
    /// Separator between the items of a list cell.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_empty_text() -> String {
    "-".to_string()
}

fn default_separator() -> String {
    ", ".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            empty_text: default_empty_text(),
            separator: default_separator(),
        }
    }
}

impl RenderConfig {
    /// Load rendering defaults from `config/config.toml`, falling back to
    /// environment variables.
    ///
    /// The settings live under the `render` section; when the section is
    /// absent entirely the compiled-in defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error when a source exists but cannot be deserialized
    /// into [`RenderConfig`].
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/config.toml").required(false))
            .add_source(Environment::with_prefix("COLONNADE").separator("__"));

        let settings = match builder.build() {
            Ok(settings) => settings,
            Err(err) => {
                // The file existed but was unreadable; retry with env only.
                if std::path::Path::new("config/config.toml").exists() {
                    log::warn!("failed to load config file, falling back to env: {err}");
                }
                Config::builder()
                    .add_source(Environment::with_prefix("COLONNADE").separator("__"))
                    .build()?
            }
        };

        match settings.get::<RenderConfig>("render") {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(RenderConfig::default()),
            Err(err) => Err(err),
        }
    }
}
