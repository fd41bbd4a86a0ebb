//! Dynamic loading flow.
//!
//! `/dynamic_loading/1` keeps the greeting hidden until a start button is
//! pressed; `/dynamic_loading/2` only renders it afterwards. Either way
//! the scenario is the same: click start, poll for the greeting.

use crate::error::Result;
use std::time::Duration;
use vigil_browser::{BrowserActions, BrowserSession};
use vigil_core::{Selector, SuiteConfig};
use vigil_sync::PollConfig;

const GREETING: &str = "Hello World!";

/// Which variant of the page to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingVariant {
    /// Element present from the start, hidden until loading completes
    HiddenElement,
    /// Element rendered only after loading completes
    RenderedAfter,
}

impl LoadingVariant {
    fn path(self) -> &'static str {
        match self {
            Self::HiddenElement => "/dynamic_loading/1",
            Self::RenderedAfter => "/dynamic_loading/2",
        }
    }
}

/// Dynamic loading page flow.
pub struct DynamicLoadingFlow<'a> {
    session: &'a BrowserSession,
    base_url: String,
    waits: PollConfig,
    grace: Duration,
}

impl<'a> DynamicLoadingFlow<'a> {
    /// Create a flow over a running session.
    pub fn new(session: &'a BrowserSession, config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            session,
            base_url: config.pages.base_url.trim_end_matches('/').to_string(),
            waits: PollConfig::from_defaults(&config.waits)?,
            grace: config.waits.grace(),
        })
    }

    /// Open one of the page variants.
    pub async fn open(&self, variant: LoadingVariant) -> Result<()> {
        self.session
            .navigate(&format!("{}{}", self.base_url, variant.path()))
            .await?;
        Ok(())
    }

    /// Click start and wait for the greeting; returns the finish text.
    pub async fn start_and_await_greeting(&self) -> Result<String> {
        self.session.click(&start_button()).await?;

        let text = self
            .session
            .wait_until_text(&finish_panel(), GREETING, &self.waits)
            .await?;

        Ok(text)
    }

    /// Click start with a deliberately tight budget, falling back to a
    /// passive grace period and one final look before giving up.
    ///
    /// The loading bar takes several seconds; a sub-second budget times
    /// out mid-load and the grace recheck is what actually observes the
    /// greeting.
    pub async fn start_with_tight_budget(&self, budget: Duration) -> Result<String> {
        self.session.click(&start_button()).await?;

        let element = self
            .session
            .wait_until_visible_with_grace(
                &finish_panel(),
                &self.waits.with_timeout(budget),
                self.grace,
            )
            .await?;

        element.text().await.map_err(Into::into)
    }
}

fn start_button() -> Selector {
    Selector::new("#start button").expect("valid selector")
}

fn finish_panel() -> Selector {
    Selector::new("#finish").expect("valid selector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_paths() {
        assert_eq!(LoadingVariant::HiddenElement.path(), "/dynamic_loading/1");
        assert_eq!(LoadingVariant::RenderedAfter.path(), "/dynamic_loading/2");
    }

    #[test]
    fn test_selectors_are_valid() {
        start_button();
        finish_panel();
    }
}
