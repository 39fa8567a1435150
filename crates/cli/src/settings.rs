use std::path::PathBuf;

use log::LevelFilter;

/// Name of the environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "FITRACK_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: LevelFilter,
    /// JSON file holding the packages to process instead of the built-in batch.
    pub batch: Option<PathBuf>,
}

impl Settings {
    /// Builds the settings from the command line arguments (without the program name) and the
    /// value of [`LOG_LEVEL_VAR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is unknown or more than one argument is given.
    pub fn new<I>(args: I, log_level: Option<&str>) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Settings::default();

        if let Some(level) = log_level {
            settings.log_level = level
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidLogLevel(level.to_string()))?;
        }

        let mut args = args.into_iter();
        settings.batch = args.next().map(PathBuf::from);

        if let Some(arg) = args.next() {
            return Err(SettingsError::UnexpectedArgument(arg));
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            batch: None,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("invalid log level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}
