//! Error types for the scenario layer.

use thiserror::Error;

/// Errors that can occur while running a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Browser/driver failure, including wait timeouts
    #[error("browser error: {0}")]
    Browser(#[from] vigil_browser::BrowserError),

    /// Invalid shared configuration (selectors, poll budgets)
    #[error("invalid configuration: {0}")]
    Config(#[from] vigil_core::VigilError),

    /// The flow landed on an unexpected page
    #[error("unexpected page: expected path {expected}, got {actual}")]
    UnexpectedPage {
        /// Path the flow should have reached
        expected: String,
        /// Path actually observed
        actual: String,
    },

    /// Fixture file could not be read
    #[error("failed to load fixture from {path}: {source}")]
    FixtureLoad {
        /// Path to the fixture file
        path: String,
        /// Underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Fixture file is not valid TOML
    #[error("failed to parse fixture TOML in {path}: {source}")]
    FixtureParse {
        /// Path to the fixture file
        path: String,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// Fixture contents failed validation
    #[error("invalid fixture {case_id}: {reason}")]
    FixtureInvalid {
        /// Case being validated
        case_id: String,
        /// Reason for validation failure
        reason: String,
    },

    /// Fixture directory not found
    #[error("fixtures directory not found at {path}")]
    DirectoryNotFound {
        /// Expected directory path
        path: String,
    },

    /// I/O error while accessing fixtures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scenario operations.
pub type Result<T> = std::result::Result<T, ScenarioError>;
