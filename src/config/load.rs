//! Configuration loading from files.
//!
//! The config file is optional. Values from `LATEXPAGE__SECTION__KEY`
//! environment variables override those in the file.

use std::path::Path;

use config::{Environment, File, FileFormat};

use super::{Config, ConfigError, ENV_PREFIX};

impl Config {
    /// Load the config from a file path, layered under environment overrides.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let exists = path.exists();
        tracing::debug!(path = %path.display(), exists, "loading config");

        let settings = config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
