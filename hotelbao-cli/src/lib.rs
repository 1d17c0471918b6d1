//! Library exports for hotelbao-cli.
//!
//! Exposes the CLI structure so benches and tooling can build the same
//! command tree as the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
