//! Helpers shared by the collectors

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a program and return its stdout. Non-zero exit is an error.
pub(crate) fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {}", program))?;

    if !output.status.success() {
        bail!("{} exited with {}", program, output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Read a small text file (sysfs, procfs) and trim surrounding whitespace
pub(crate) fn read_trimmed(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.trim().to_string())
}

/// Environment variable, treating empty as unset
pub(crate) fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

pub(crate) fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Percentage of `part` in `total` with one decimal, e.g. "42.5%"
pub(crate) fn format_percent(part: u64, total: u64) -> Option<String> {
    if total == 0 {
        return None;
    }
    Some(format!("{:.1}%", part as f64 / total as f64 * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 4).as_deref(), Some("25.0%"));
        assert_eq!(format_percent(1, 3).as_deref(), Some("33.3%"));
        assert_eq!(format_percent(5, 0), None);
    }

    #[test]
    fn test_missing_program_is_an_error() {
        assert!(run_command("pulsefetch-no-such-program", &[]).is_err());
    }

    #[test]
    fn test_read_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value");
        std::fs::write(&path, "  ThinkPad X1\n").unwrap();
        assert_eq!(read_trimmed(&path).unwrap(), "ThinkPad X1");
        assert!(read_trimmed(dir.path().join("missing")).is_err());
    }
}
