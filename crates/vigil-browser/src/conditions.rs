//! Probes over live page state and the session-level wait helpers.
//!
//! Every probe re-resolves its selector on each invocation, so a node
//! that was removed and recreated is observed through a fresh handle
//! rather than a stale one. Probes classify what they see as `Ready`,
//! `Pending`, or `Halted`; the wait helpers run them through the
//! `vigil-sync` poller and convert the terminal result into
//! [`BrowserError`] for callers that want `?`.

use crate::element::ElementHandle;
use crate::error::{BrowserError, Result};
use crate::session::BrowserSession;
use std::time::Duration;
use vigil_core::Selector;
use vigil_sync::{poll, poll_with_grace, Outcome, PollConfig, PollResult};

/// Element matching `selector` exists and is rendered.
pub async fn visible(
    session: &BrowserSession,
    selector: &Selector,
) -> Result<Outcome<ElementHandle>> {
    match session.locate(selector).await? {
        Some(element) if element.is_visible().await? => Ok(Outcome::Ready(element)),
        _ => Ok(Outcome::Pending),
    }
}

/// Element matching `selector` is absent or no longer rendered.
pub async fn gone(session: &BrowserSession, selector: &Selector) -> Result<Outcome<()>> {
    match session.locate(selector).await? {
        None => Ok(Outcome::Ready(())),
        Some(element) if !element.is_visible().await? => Ok(Outcome::Ready(())),
        Some(_) => Ok(Outcome::Pending),
    }
}

/// Element matching `selector` is visible and its text contains `needle`.
///
/// Ready carries the full observed text.
pub async fn text_contains(
    session: &BrowserSession,
    selector: &Selector,
    needle: &str,
) -> Result<Outcome<String>> {
    match session.locate(selector).await? {
        Some(element) if element.is_visible().await? => {
            let text = element.text().await?;
            if text.contains(needle) {
                Ok(Outcome::Ready(text))
            } else {
                Ok(Outcome::Pending)
            }
        }
        _ => Ok(Outcome::Pending),
    }
}

/// Element matching `selector` is visible and not disabled.
pub async fn enabled(
    session: &BrowserSession,
    selector: &Selector,
) -> Result<Outcome<ElementHandle>> {
    match session.locate(selector).await? {
        Some(element) if element.is_visible().await? && element.is_enabled().await? => {
            Ok(Outcome::Ready(element))
        }
        _ => Ok(Outcome::Pending),
    }
}

/// A specific held handle has been detached from the page structure.
pub async fn detached(handle: &ElementHandle) -> Result<Outcome<()>> {
    if handle.is_attached().await {
        Ok(Outcome::Pending)
    } else {
        Ok(Outcome::Ready(()))
    }
}

/// Element visible inside a container that must itself stay present.
///
/// If the container disappears the condition can never become true
/// anymore: that is reported as `Halted`, not retried away.
pub async fn visible_within(
    session: &BrowserSession,
    container: &Selector,
    selector: &Selector,
) -> Result<Outcome<ElementHandle>> {
    if session.locate(container).await?.is_none() {
        return Ok(Outcome::Halted(format!("container '{container}' is gone")));
    }

    visible(session, selector).await
}

impl BrowserSession {
    /// Wait until the selector resolves to a visible element.
    pub async fn wait_until_visible(
        &self,
        selector: &Selector,
        config: &PollConfig,
    ) -> Result<ElementHandle> {
        let condition = format!("element '{selector}' to become visible");
        let result = poll(|| visible(self, selector), config).await?;
        settle(result, &condition, config)
    }

    /// Wait until the selector resolves to a visible element, granting a
    /// passive grace period and one final look after a timeout.
    pub async fn wait_until_visible_with_grace(
        &self,
        selector: &Selector,
        config: &PollConfig,
        grace: Duration,
    ) -> Result<ElementHandle> {
        let condition = format!("element '{selector}' to become visible");
        let result = poll_with_grace(|| visible(self, selector), config, grace).await?;
        settle(result, &condition, config)
    }

    /// Wait until the selector matches nothing visible.
    pub async fn wait_until_gone(&self, selector: &Selector, config: &PollConfig) -> Result<()> {
        let condition = format!("element '{selector}' to be gone");
        let result = poll(|| gone(self, selector), config).await?;
        settle(result, &condition, config)
    }

    /// Wait until the selector's text contains `needle`; returns the full text.
    pub async fn wait_until_text(
        &self,
        selector: &Selector,
        needle: &str,
        config: &PollConfig,
    ) -> Result<String> {
        let condition = format!("element '{selector}' to contain text '{needle}'");
        let result = poll(|| text_contains(self, selector, needle), config).await?;
        settle(result, &condition, config)
    }

    /// Wait until the selector resolves to a visible, enabled element.
    pub async fn wait_until_enabled(
        &self,
        selector: &Selector,
        config: &PollConfig,
    ) -> Result<ElementHandle> {
        let condition = format!("element '{selector}' to become enabled");
        let result = poll(|| enabled(self, selector), config).await?;
        settle(result, &condition, config)
    }

    /// Wait until a held handle goes stale.
    pub async fn wait_until_detached(
        &self,
        handle: &ElementHandle,
        config: &PollConfig,
    ) -> Result<()> {
        let condition = format!("element '{}' to be detached", handle.selector());
        let result = poll(|| detached(handle), config).await?;
        settle(result, &condition, config)
    }

    /// Wait for a visible element inside a container that must stay present.
    pub async fn wait_until_visible_within(
        &self,
        container: &Selector,
        selector: &Selector,
        config: &PollConfig,
    ) -> Result<ElementHandle> {
        let condition = format!("element '{selector}' to become visible within '{container}'");
        let result = poll(|| visible_within(self, container, selector), config).await?;
        settle(result, &condition, config)
    }
}

/// Convert a terminal poll result into the browser error taxonomy.
fn settle<T>(result: PollResult<T>, condition: &str, config: &PollConfig) -> Result<T> {
    match result {
        PollResult::Success(value) => Ok(value),
        PollResult::TimedOut => Err(BrowserError::WaitTimeout {
            condition: condition.to_string(),
            timeout: config.timeout(),
        }),
        PollResult::Failed(reason) => Err(BrowserError::ConditionFailed {
            condition: condition.to_string(),
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_success() {
        let result = settle(PollResult::Success(5), "five", &PollConfig::default());
        assert_eq!(result.expect("success settles to Ok"), 5);
    }

    #[test]
    fn test_settle_timeout_carries_condition() {
        let config = PollConfig::default();
        let result: Result<()> = settle(
            PollResult::TimedOut,
            "element '#finish' to become visible",
            &config,
        );

        match result {
            Err(BrowserError::WaitTimeout { condition, timeout }) => {
                assert!(condition.contains("#finish"));
                assert_eq!(timeout, config.timeout());
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
    }

    #[test]
    fn test_settle_failure_carries_reason() {
        let result: Result<()> = settle(
            PollResult::Failed("container '#rows' is gone".to_string()),
            "element '#row2 input' to become visible within '#rows'",
            &PollConfig::default(),
        );

        match result {
            Err(BrowserError::ConditionFailed { reason, .. }) => {
                assert!(reason.contains("#rows"));
            }
            other => panic!("expected ConditionFailed, got {other:?}"),
        }
    }
}
