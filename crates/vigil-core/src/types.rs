//! Shared types used across the Vigil suite.
//!
//! This module defines common newtypes that provide type safety
//! and clear domain modeling.

use crate::error::VigilError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for CSS selectors with validation.
///
/// Selectors must be non-empty and free of surrounding whitespace;
/// everything else is left to the browser's selector engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Create a new `Selector` from a string.
    ///
    /// # Errors
    /// Returns error if the selector is empty or has leading/trailing whitespace.
    pub fn new(selector: impl Into<String>) -> Result<Self, VigilError> {
        let selector = selector.into();
        Self::validate(&selector)?;
        Ok(Self(selector))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(selector: &str) -> Result<(), VigilError> {
        if selector.is_empty() {
            return Err(VigilError::Validation(
                "invalid selector: must not be empty".to_string(),
            ));
        }

        if selector.trim() != selector {
            return Err(VigilError::Validation(format!(
                "invalid selector: must not have surrounding whitespace, got '{selector}'"
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for test case identifiers with validation.
///
/// Case IDs must be lowercase alphanumeric with hyphens, 3-50 characters.
/// They name fixture rows and show up in log output and failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(String);

impl CaseId {
    /// Create a new `CaseId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID doesn't match the required format.
    pub fn new(id: impl Into<String>) -> Result<Self, VigilError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate case ID format: lowercase alphanumeric with hyphens, 3-50 chars.
    fn validate(id: &str) -> Result<(), VigilError> {
        static CASE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CASE_REGEX
            .get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]{1,48}[a-z0-9]$").expect("valid regex"));

        if id.len() < 3 || id.len() > 50 {
            return Err(VigilError::Validation(format!(
                "invalid case ID: must be 3-50 characters, got {} characters",
                id.len()
            )));
        }

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(VigilError::Validation(format!(
                "invalid case ID: must be lowercase alphanumeric with hyphens, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
