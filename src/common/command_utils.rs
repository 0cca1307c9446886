use crate::error::Result;
use std::path::Path;
use std::process::{Command, Output};

/// Check if a command is available in PATH.
pub fn is_command_available(cmd: &str) -> bool {
    if Command::new(cmd)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
    {
        return true;
    }

    // On Windows, also try with .exe extension
    if cfg!(windows) && !cmd.ends_with(".exe") {
        let cmd_with_exe = format!("{}.exe", cmd);
        return Command::new(&cmd_with_exe)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
    }

    false
}

/// Run `docker compose config --quiet` against the compose project in `dir`.
/// A success exit status means the file parsed and validated.
pub fn compose_config_check(dir: &Path) -> Result<Output> {
    let output = Command::new("docker")
        .args(["compose", "config", "--quiet"])
        .current_dir(dir)
        .output()?;

    Ok(output)
}
