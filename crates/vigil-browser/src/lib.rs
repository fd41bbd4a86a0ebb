//! Browser driving for the Vigil end-to-end suite.
//!
//! Provides a scoped Chromium session over the DevTools protocol,
//! element handles with stale-aware state queries, and explicit-wait
//! helpers built on the `vigil-sync` poller.

pub mod actions;
pub mod conditions;
pub mod element;
pub mod error;
pub mod session;

pub use actions::BrowserActions;
pub use element::ElementHandle;
pub use error::{BrowserError, Result};
pub use session::BrowserSession;
