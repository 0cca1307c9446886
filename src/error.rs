use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DcmError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output file {0} already exists (use --force to overwrite)")]
    OutputExists(PathBuf),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown service id '{0}'")]
    UnknownService(String),

    #[error("Duplicate service id '{0}' in catalog file")]
    DuplicateService(String),

    #[error("Failed to read catalog file {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Settings file parsing failed: {0}")]
    ParsingFailed(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("docker is not available on PATH; install Docker to run validation")]
    DockerUnavailable,

    #[error("{failed} of {total} services failed compose validation: {}", .services.join(", "))]
    ServicesFailed {
        failed: usize,
        total: usize,
        services: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, DcmError>;
