use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("chromium error: {0}")]
    Chromium(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("selector not found: {0}")]
    SelectorNotFound(String),

    #[error("timed out after {timeout:?} waiting for {condition}")]
    WaitTimeout {
        /// What the wait was for, phrased as expected state
        condition: String,
        /// Budget that elapsed
        timeout: Duration,
    },

    #[error("condition permanently failed: {condition}: {reason}")]
    ConditionFailed {
        /// What the wait was for, phrased as expected state
        condition: String,
        /// Why it can no longer become true
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrowserError::Navigation("page not found".to_string());
        assert_eq!(err.to_string(), "navigation failed: page not found");
    }

    #[test]
    fn test_wait_timeout_mentions_condition_and_budget() {
        let err = BrowserError::WaitTimeout {
            condition: "element '#finish' to become visible".to_string(),
            timeout: Duration::from_secs(2),
        };
        let message = err.to_string();
        assert!(message.contains("#finish"));
        assert!(message.contains("2s"));
    }

    #[test]
    fn test_condition_failed_mentions_reason() {
        let err = BrowserError::ConditionFailed {
            condition: "element '#checkbox' to become visible".to_string(),
            reason: "container '#checkbox-example' is gone".to_string(),
        };
        assert!(err.to_string().contains("container"));
    }
}
