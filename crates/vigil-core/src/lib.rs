//! Vigil Core - Foundation crate for the Vigil end-to-end suite.
//!
//! This crate provides shared types, error handling, configuration
//! management, and logging setup that the other Vigil crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`Selector`, `CaseId`)
//! - [`logging`] - tracing subscriber initialization
//!
//! # Example
//!
//! ```rust
//! use vigil_core::{SuiteConfig, Selector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SuiteConfig::default();
//! let flash = Selector::new("div#flash")?;
//! assert_eq!(flash.as_str(), "div#flash");
//! assert!(config.browser.headless);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{BrowserConfig, PagesConfig, SuiteConfig, WaitDefaults};
pub use error::{ConfigError, ConfigResult, Result, VigilError};
pub use types::{CaseId, Selector};
