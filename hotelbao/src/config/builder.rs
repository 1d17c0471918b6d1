//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from files, environment and
/// programmatic overrides.
///
/// # Examples
///
/// ```
/// use hotelbao::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         currency_symbol: Some("US$".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.currency_symbol.as_deref(), Some("US$"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files from the current directory and the
    /// default data directory, then applies the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory where `hotelbao.yaml` discovery starts.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Sets the data directory holding `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `HOTELBAO_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic layer above every other source. Later calls take
    /// precedence over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges and validates every source.
    ///
    /// Each file is validated on its own before merging, so an error names
    /// the file's field even if a higher layer would override it.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config)?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_file_overrides_data_dir_file() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(
            data_dir.join("config.yaml"),
            "currency_symbol: EUR\noutput_format: csv\n",
        )
        .unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "currency_symbol: US$\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_data_dir(&data_dir)
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.currency_symbol.as_deref(), Some("US$"));
        assert_eq!(config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_programmatic_layer_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "date_format: '%F'\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_data_dir(temp.path())
            .skip_env()
            .with_config(Config {
                date_format: Some("%d.%m.%Y".into()),
                ..Config::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.date_format.as_deref(), Some("%d.%m.%Y"));
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "date_format: '%Q'\n").unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_data_dir(temp.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
