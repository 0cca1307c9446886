use crate::error::{DcmError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write one generated artifact, creating parent directories as needed.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_artifact(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(DcmError::OutputExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Resolve the output directory for generated files, defaulting to the
/// current directory.
pub fn output_dir(requested: Option<&Path>) -> PathBuf {
    requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/docker-compose.yaml");

        write_artifact(&path, "services:\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "services:\n");

        let err = write_artifact(&path, "changed", false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        write_artifact(&path, "changed", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed");
    }

    #[test]
    fn output_dir_defaults_to_current() {
        assert_eq!(output_dir(None), PathBuf::from("."));
        assert_eq!(
            output_dir(Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
    }
}
