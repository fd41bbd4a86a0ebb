//! End-to-end UI scenarios for the Vigil suite.
//!
//! Each scenario borrows a scoped [`BrowserSession`], drives one hosted
//! demo page through explicit waits, and reports a typed outcome. The
//! actual pass/fail decisions live in the integration tests under
//! `tests/`; this crate holds the page flows they share.
//!
//! [`BrowserSession`]: vigil_browser::BrowserSession

pub mod dynamic_controls;
pub mod dynamic_loading;
pub mod error;
pub mod fixtures;
pub mod login;
pub mod practice_rows;

pub use dynamic_controls::DynamicControlsFlow;
pub use dynamic_loading::{DynamicLoadingFlow, LoadingVariant};
pub use error::{Result, ScenarioError};
pub use fixtures::{FixtureLoader, LoginAttempt};
pub use login::{LoginFlow, LoginOutcome};
pub use practice_rows::PracticeRowsFlow;
