//! Vigil Sync - bounded-time condition polling.
//!
//! End-to-end checks spend most of their time waiting for a page to catch
//! up: an element appearing, a control becoming enabled, a replaced node
//! going stale. This crate provides the one reusable primitive behind all
//! of those waits: a probe classifying live UI state as ready, not-yet,
//! or permanently unreachable, and a poller that re-runs the probe on a
//! fixed interval up to a deadline.
//!
//! # Modules
//!
//! - [`outcome`] - The tri-state [`Outcome`] a probe reports and the
//!   terminal [`PollResult`] a poll produces
//! - [`poller`] - [`PollConfig`] and the [`poll`] / [`poll_with_grace`]
//!   entry points
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vigil_sync::{poll, Outcome, PollConfig, PollResult};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), vigil_core::VigilError> {
//! let config = PollConfig::new(Duration::from_secs(1), Duration::from_millis(10))?;
//! let result = poll(|| async { Ok::<_, vigil_core::VigilError>(Outcome::Ready(42)) }, &config).await?;
//! assert_eq!(result, PollResult::Success(42));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod outcome;
pub mod poller;

pub use outcome::{Outcome, PollResult};
pub use poller::{poll, poll_with_grace, PollConfig};
