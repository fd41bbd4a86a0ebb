//! Dynamic controls flow.
//!
//! `/dynamic_controls` removes and re-adds a checkbox, and toggles a text
//! input between disabled and enabled. The remove/add cycle is where
//! stale handles show up: the re-added checkbox is a different node, so
//! the old handle must be observed as detached and a fresh one resolved.

use crate::error::Result;
use vigil_browser::{BrowserActions, BrowserSession, ElementHandle};
use vigil_core::{Selector, SuiteConfig};
use vigil_sync::PollConfig;

/// Dynamic controls page flow.
pub struct DynamicControlsFlow<'a> {
    session: &'a BrowserSession,
    base_url: String,
    waits: PollConfig,
}

impl<'a> DynamicControlsFlow<'a> {
    /// Create a flow over a running session.
    pub fn new(session: &'a BrowserSession, config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            session,
            base_url: config.pages.base_url.trim_end_matches('/').to_string(),
            waits: PollConfig::from_defaults(&config.waits)?,
        })
    }

    /// Open the page.
    pub async fn open(&self) -> Result<()> {
        self.session
            .navigate(&format!("{}/dynamic_controls", self.base_url))
            .await?;
        Ok(())
    }

    /// Remove the checkbox and wait until the held handle goes stale.
    ///
    /// Returns the confirmation message shown once the removal finished.
    pub async fn remove_checkbox(&self) -> Result<String> {
        let held = self.session.require(&checkbox()).await?;

        self.session.click(&checkbox_toggle()).await?;

        // The old node must detach and the selector must stop matching
        self.session.wait_until_detached(&held, &self.waits).await?;
        self.session.wait_until_gone(&checkbox(), &self.waits).await?;

        let message = self
            .session
            .wait_until_text(&message_panel(), "It's gone!", &self.waits)
            .await?;

        Ok(message)
    }

    /// Re-add the checkbox and resolve a fresh handle to the new node.
    ///
    /// Reusing the pre-removal handle here would observe a stale node;
    /// the wait re-resolves the selector on every probe instead.
    pub async fn add_checkbox(&self) -> Result<ElementHandle> {
        self.session.click(&checkbox_toggle()).await?;

        let fresh = self
            .session
            .wait_until_visible_within(&checkbox_form(), &checkbox(), &self.waits)
            .await?;

        self.session
            .wait_until_text(&message_panel(), "It's back!", &self.waits)
            .await?;

        Ok(fresh)
    }

    /// Enable the text input, type into it, and return the typed value.
    pub async fn enable_and_fill_input(&self, text: &str) -> Result<String> {
        self.session.click(&input_toggle()).await?;

        let input = self
            .session
            .wait_until_enabled(&text_input(), &self.waits)
            .await?;

        input.send_text(text).await?;

        self.session
            .wait_until_text(&message_panel(), "It's enabled!", &self.waits)
            .await?;

        input.value().await.map_err(Into::into)
    }
}

fn checkbox_form() -> Selector {
    Selector::new("#checkbox-example").expect("valid selector")
}

fn checkbox() -> Selector {
    Selector::new("#checkbox").expect("valid selector")
}

fn checkbox_toggle() -> Selector {
    Selector::new("#checkbox-example button").expect("valid selector")
}

fn text_input() -> Selector {
    Selector::new("#input-example input").expect("valid selector")
}

fn input_toggle() -> Selector {
    Selector::new("#input-example button").expect("valid selector")
}

fn message_panel() -> Selector {
    Selector::new("#message").expect("valid selector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_valid() {
        checkbox_form();
        checkbox();
        checkbox_toggle();
        text_input();
        input_toggle();
        message_panel();
    }
}
