use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;
use tracing::Level;

use crate::constants::{CONFIG_FILE, DEFAULT_PRODID, ENV_PREFIX, ICALENDAR_VERSION};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// Properties stamped onto calendars created (not parsed) by the codec.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub prodid: String,
    pub version: String,
}

impl CalendarConfig {
    /// ## Summary
    /// Checks that the configured identifiers can be written as iCalendar text.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `prodid` is empty or contains a line
    /// break, or if `version` is empty.
    pub fn validate(&self) -> CoreResult<()> {
        if self.prodid.trim().is_empty() {
            return Err(CoreError::ConfigError("calendar.prodid is empty".into()));
        }
        if self.prodid.contains(['\r', '\n']) {
            return Err(CoreError::ConfigError(
                "calendar.prodid contains a line break".into(),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(CoreError::ConfigError("calendar.version is empty".into()));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            version: ICALENDAR_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level name (`trace` through `error`, any case).
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the name is not a tracing level.
    pub fn level(&self) -> CoreResult<Level> {
        self.level.trim().parse().map_err(|e| {
            CoreError::ConfigError(format!("logging.level {:?}: {e}", self.level))
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from `ALMANAC_*` environment variables and an optional
    /// `almanac.toml`. Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the result does not validate.
    pub fn load() -> Result<Self> {
        let builder = Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            );
        Self::finish(builder)
    }

    /// ## Summary
    /// Loads settings from TOML text layered over the defaults. The
    /// environment is not consulted.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML, a key has the wrong
    /// type, or the result does not validate.
    pub fn from_toml(text: &str) -> Result<Self> {
        let builder =
            Self::builder()?.add_source(config::File::from_str(text, config::FileFormat::Toml));
        Self::finish(builder)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("calendar.version", ICALENDAR_VERSION)?
            .set_default("logging.level", "info")?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;

        settings.calendar.validate()?;
        let level = settings.logging.level()?;
        tracing::debug!(prodid = %settings.calendar.prodid, %level, "Settings loaded");
        Ok(settings)
    }
}

/// ## Summary
/// Loads settings from environment variables, a `.env` file and `almanac.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
