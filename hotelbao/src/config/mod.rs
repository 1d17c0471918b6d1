//! Configuration system for hotelbao.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (data directory and per-directory `hotelbao.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every layer
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTELBAO_*`)
//! 3. Nearest `hotelbao.yaml`, walking up from the working directory
//! 4. Data directory config (`~/.hotelbao/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hotelbao::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/hotel"))
//!     .build()
//!     .unwrap();
//!
//! println!("currency: {:?}", config.currency_symbol);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
