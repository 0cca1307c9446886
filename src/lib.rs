//! # DCM: Docker Compose Maker
//!
//! A Rust command-line application that turns a selection of self-hosted
//! service definitions into a single, ready-to-run `docker-compose.yaml`
//! plus a matching `.env` file.
//!
//! ## Features
//!
//! - **Canonical Assembly**: Merges independently authored service snippets,
//!   whatever their original indentation, into one valid 2-space-indented
//!   compose document
//! - **Placeholder Interpolation**: Optionally substitutes `${...}` settings
//!   placeholders inline instead of deferring to the `.env` file
//! - **Port Conflict Repair**: Detects host ports claimed by multiple
//!   services and deterministically remaps later claimants to free ports
//! - **Env Emission**: Renders the same settings into a flat `KEY=value`
//!   environment file
//! - **Validation**: Checks generated files with `docker compose config`,
//!   per service and for the combined set
//!
//! ## Example
//!
//! ```rust
//! use dcm::{catalog::Catalog, config::Settings, generator};
//!
//! let catalog = Catalog::builtin();
//! let selected = catalog.select(&["sonarr".to_string(), "radarr".to_string()])?;
//!
//! let output = generator::generate_compose(&selected, &Settings::default(), false);
//! let env_file = generator::generate_env_file(&Settings::default());
//! assert!(output.content.contains("services:"));
//! assert!(env_file.contains("PUID=1000"));
//! # Ok::<(), dcm::error::DcmError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod generator;

// Re-export commonly used types and functions
pub use catalog::{Catalog, ServiceDefinition};
pub use config::Settings;
pub use error::{DcmError, Result};
pub use generator::{generate_compose, generate_env_file, ComposeOutput, ConflictReport};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
