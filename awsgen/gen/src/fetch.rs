//! Fetching the service model repository.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::errors::GeneratorError;

/// Materializes the model repository at a tag into a local directory.
pub trait ModelFetcher {
    /// Fetches `url` at `tag` into `destination`, which must not exist yet.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::FetchFailed` or `GeneratorError::ProcessError`
    /// if the repository cannot be fetched.
    fn fetch(&self, url: &str, tag: &str, destination: &Path) -> Result<(), GeneratorError>;
}

/// [`ModelFetcher`] backed by the `git` command line tool.
#[derive(Debug, Clone, Default)]
pub struct GitModelFetcher;

impl ModelFetcher for GitModelFetcher {
    fn fetch(&self, url: &str, tag: &str, destination: &Path) -> Result<(), GeneratorError> {
        info!(url, tag, destination = %destination.display(), "cloning model repository");

        let output = Command::new("git")
            .args(["clone", "--quiet", "--depth", "1", "--branch", tag, url])
            .arg(destination)
            .output()
            .map_err(|e| GeneratorError::ProcessError {
                program: "git".to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(GeneratorError::FetchFailed {
                tag: tag.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clone_of_missing_repository_reports_tag() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-repository");
        let destination = dir.path().join("models");

        let result = GitModelFetcher.fetch(missing.to_str().unwrap(), "v0.0.0", &destination);

        match result {
            Err(GeneratorError::FetchFailed { tag, .. }) => assert_eq!(tag, "v0.0.0"),
            // git itself may be unavailable in the test environment
            Err(GeneratorError::ProcessError { program, .. }) => assert_eq!(program, "git"),
            other => panic!("expected a fetch failure, got {other:?}"),
        }
    }
}
