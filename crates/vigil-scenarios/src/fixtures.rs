//! Login attempt fixtures loaded from TOML files.
//!
//! Negative-login coverage is data-driven: each fixture file under
//! `fixtures/` carries credential rows with the flash message the page
//! must answer with.

use crate::error::{Result, ScenarioError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vigil_core::CaseId;

/// One credentials row with its expected rejection message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginAttempt {
    /// Case identifier, shown in logs and failure messages
    pub id: CaseId,

    /// Username to type into the form
    pub username: String,

    /// Password to type into the form
    pub password: String,

    /// Substring the flash banner must contain after submission
    pub expected_message: String,
}

impl LoginAttempt {
    /// Validate the attempt for completeness.
    pub fn validate(&self) -> Result<()> {
        if self.expected_message.is_empty() {
            return Err(ScenarioError::FixtureInvalid {
                case_id: self.id.to_string(),
                reason: "expected_message cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// A fixture file: a list of login attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    attempts: Vec<LoginAttempt>,
}

/// Loader for fixture files from a directory.
pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    /// Create a new loader with the given fixtures directory.
    ///
    /// # Errors
    /// Returns error if the directory doesn't exist.
    pub fn new(fixtures_dir: impl Into<PathBuf>) -> Result<Self> {
        let fixtures_dir = fixtures_dir.into();

        if !fixtures_dir.is_dir() {
            return Err(ScenarioError::DirectoryNotFound {
                path: fixtures_dir.display().to_string(),
            });
        }

        Ok(Self { fixtures_dir })
    }

    /// Create a loader using the default fixtures directory.
    ///
    /// Looks for `fixtures/` relative to the workspace root.
    ///
    /// # Errors
    /// Returns error if the default directory doesn't exist.
    pub fn with_default_dir() -> Result<Self> {
        // Find workspace root by looking for Cargo.toml with [workspace]
        let mut current_dir = std::env::current_dir()?;

        loop {
            let cargo_toml = current_dir.join("Cargo.toml");
            if cargo_toml.exists() {
                if let Ok(contents) = std::fs::read_to_string(&cargo_toml) {
                    if contents.contains("[workspace]") {
                        return Self::new(current_dir.join("fixtures"));
                    }
                }
            }

            if let Some(parent) = current_dir.parent() {
                current_dir = parent.to_path_buf();
            } else {
                break;
            }
        }

        // Fallback: try relative path
        Self::new(PathBuf::from("fixtures"))
    }

    /// Load all login attempts from every TOML file in the directory.
    ///
    /// Invalid files and invalid rows are logged as warnings and skipped.
    ///
    /// # Errors
    /// Returns error if the directory can't be read.
    pub fn load_all(&self) -> Result<Vec<LoginAttempt>> {
        let mut attempts = Vec::new();

        for entry in std::fs::read_dir(&self.fixtures_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match Self::load_from_path(&path) {
                Ok(mut file_attempts) => attempts.append(&mut file_attempts),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable fixture file"
                    );
                }
            }
        }

        info!(
            count = attempts.len(),
            dir = %self.fixtures_dir.display(),
            "loaded login fixtures"
        );

        Ok(attempts)
    }

    /// Load and validate the attempts in one fixture file.
    fn load_from_path(path: &Path) -> Result<Vec<LoginAttempt>> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::FixtureLoad {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        let file: FixtureFile =
            toml::from_str(&contents).map_err(|e| ScenarioError::FixtureParse {
                path: path.display().to_string(),
                source: e,
            })?;

        let mut valid = Vec::new();
        for attempt in file.attempts {
            match attempt.validate() {
                Ok(()) => {
                    debug!(case = %attempt.id, "loaded login fixture");
                    valid.push(attempt);
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping invalid fixture row"
                    );
                }
            }
        }

        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    const VALID_FIXTURE: &str = r#"
[[attempts]]
id = "invalid-username"
username = "wronguser"
password = "SuperSecretPassword!"
expected_message = "Your username is invalid!"

[[attempts]]
id = "invalid-password"
username = "tomsmith"
password = "wrongpassword"
expected_message = "Your password is invalid!"
"#;

    #[test]
    fn test_loader_new_with_existing_dir() {
        let temp_dir = TempDir::new().expect("create temp dir");
        assert!(FixtureLoader::new(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_loader_new_with_nonexistent_dir() {
        let loader = FixtureLoader::new("/nonexistent/path/to/fixtures");
        assert!(matches!(
            loader,
            Err(ScenarioError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_load_all_attempts() {
        let temp_dir = TempDir::new().expect("create temp dir");
        write_fixture(temp_dir.path(), "negative-logins.toml", VALID_FIXTURE);

        let loader = FixtureLoader::new(temp_dir.path()).expect("create loader");
        let attempts = loader.load_all().expect("load fixtures");

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].id.as_str(), "invalid-username");
        assert_eq!(attempts[1].expected_message, "Your password is invalid!");
    }

    #[test]
    fn test_load_all_skips_invalid_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        write_fixture(temp_dir.path(), "good.toml", VALID_FIXTURE);
        write_fixture(temp_dir.path(), "broken.toml", "not toml at all [[[");

        let loader = FixtureLoader::new(temp_dir.path()).expect("create loader");
        let attempts = loader.load_all().expect("load fixtures");

        assert_eq!(attempts.len(), 2);
    }

    #[test]
    fn test_load_all_skips_invalid_row() {
        let temp_dir = TempDir::new().expect("create temp dir");
        write_fixture(
            temp_dir.path(),
            "partial.toml",
            r#"
[[attempts]]
id = "empty-expectation"
username = "tomsmith"
password = "whatever"
expected_message = ""

[[attempts]]
id = "blank-credentials"
username = ""
password = ""
expected_message = "Your username is invalid!"
"#,
        );

        let loader = FixtureLoader::new(temp_dir.path()).expect("create loader");
        let attempts = loader.load_all().expect("load fixtures");

        // Empty credentials are a legitimate case; an empty expectation is not
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].id.as_str(), "blank-credentials");
    }

    #[test]
    fn test_non_toml_files_ignored() {
        let temp_dir = TempDir::new().expect("create temp dir");
        write_fixture(temp_dir.path(), "README.md", "# not a fixture");
        write_fixture(temp_dir.path(), "negative-logins.toml", VALID_FIXTURE);

        let loader = FixtureLoader::new(temp_dir.path()).expect("create loader");
        let attempts = loader.load_all().expect("load fixtures");

        assert_eq!(attempts.len(), 2);
    }

    #[test]
    fn test_validate_rejects_empty_expected_message() {
        let attempt = LoginAttempt {
            id: CaseId::new("some-case").expect("valid case ID"),
            username: "user".to_string(),
            password: "pass".to_string(),
            expected_message: String::new(),
        };

        assert!(matches!(
            attempt.validate(),
            Err(ScenarioError::FixtureInvalid { .. })
        ));
    }
}
