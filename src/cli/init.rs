use crate::core::store::{self, InitOutcome};
use anyhow::Result;
use tracing::debug;
use std::io::Write;
use std::path::Path;

/// Create the empty store. Failures are reported, not propagated.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    match store::init(path) {
        Ok(InitOutcome::AlreadyExists) => {
            debug!("Properties file already exists: {}", path.display());
        }
        Ok(InitOutcome::Created) => {
            debug!("Created empty properties file: {}", path.display());
        }
        Err(e) => writeln!(out, "Error creating properties file: {:#}", e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_reports_failure_without_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("userDatabase.properties");

        let mut out = Vec::new();
        run(&path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error creating properties file: "), "{}", text);
        assert!(!path.exists());
    }

    #[test]
    fn test_init_silent_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("userDatabase.properties");
        let mut out = Vec::new();
        run(&path, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(path.is_file());
    }
}
