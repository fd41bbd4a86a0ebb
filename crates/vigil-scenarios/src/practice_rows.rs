//! Practice rows flow.
//!
//! The exceptions practice page grows a second food row a few seconds
//! after "Add" is pressed, keeps row 1 read-only until "Edit" is pressed,
//! and drops its instructions paragraph once a row is added.

use crate::error::Result;
use vigil_browser::{BrowserActions, BrowserSession};
use vigil_core::{Selector, SuiteConfig};
use vigil_sync::PollConfig;

/// Practice rows page flow.
pub struct PracticeRowsFlow<'a> {
    session: &'a BrowserSession,
    url: String,
    waits: PollConfig,
}

impl<'a> PracticeRowsFlow<'a> {
    /// Create a flow over a running session.
    pub fn new(session: &'a BrowserSession, config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            session,
            url: config.pages.exceptions_url.clone(),
            waits: PollConfig::from_defaults(&config.waits)?,
        })
    }

    /// Open the page.
    pub async fn open(&self) -> Result<()> {
        self.session.navigate(&self.url).await?;
        Ok(())
    }

    /// Press "Add" and wait for the second row's input to appear.
    ///
    /// Row 2 only exists once the page finishes rendering it. Row 1 is
    /// the canary: if the rows table vanished entirely the wait reports
    /// a permanent failure instead of timing out blindly.
    pub async fn add_second_row(&self) -> Result<()> {
        self.session.click(&add_button()).await?;

        self.session
            .wait_until_visible_within(&row1(), &row2_input(), &self.waits)
            .await?;

        Ok(())
    }

    /// Type into row 2 and save it via the row-scoped save button.
    ///
    /// Returns the confirmation message. The page has two buttons named
    /// "Save"; the selector stays scoped to row 2 because the other one
    /// is disabled and refuses interaction.
    pub async fn save_second_row(&self, text: &str) -> Result<String> {
        let input = self
            .session
            .wait_until_visible_within(&row1(), &row2_input(), &self.waits)
            .await?;
        input.send_text(text).await?;

        self.session.click(&row2_save_button()).await?;

        let message = self
            .session
            .wait_until_text(&confirmation(), "Row 2 was saved", &self.waits)
            .await?;

        Ok(message)
    }

    /// Edit row 1: unlock it, replace its value, save, and confirm.
    ///
    /// Returns the input's value after saving.
    pub async fn edit_first_row(&self, text: &str) -> Result<String> {
        self.session
            .wait_until_visible(&row1_input(), &self.waits)
            .await?;
        self.session.click(&edit_button()).await?;

        // Typing before the unlock lands would hit a read-only input
        let input = self
            .session
            .wait_until_enabled(&row1_input(), &self.waits)
            .await?;

        input.clear().await?;
        input.send_text(text).await?;
        self.session.click(&save_button()).await?;

        self.session
            .wait_until_text(&confirmation(), "Row 1 was saved", &self.waits)
            .await?;

        input.value().await.map_err(Into::into)
    }

    /// Press "Add" and wait for the instructions paragraph to disappear.
    pub async fn instructions_disappear(&self) -> Result<()> {
        self.session.click(&add_button()).await?;
        self.session
            .wait_until_gone(&instructions(), &self.waits)
            .await?;
        Ok(())
    }
}

fn add_button() -> Selector {
    Selector::new("#add_btn").expect("valid selector")
}

fn edit_button() -> Selector {
    Selector::new("#edit_btn").expect("valid selector")
}

fn save_button() -> Selector {
    Selector::new("#save_btn").expect("valid selector")
}

fn row1() -> Selector {
    Selector::new("#row1").expect("valid selector")
}

fn row1_input() -> Selector {
    Selector::new("#row1 input").expect("valid selector")
}

fn row2_input() -> Selector {
    Selector::new("#row2 input").expect("valid selector")
}

fn row2_save_button() -> Selector {
    Selector::new("#row2 button[name='Save']").expect("valid selector")
}

fn confirmation() -> Selector {
    Selector::new("#confirmation").expect("valid selector")
}

fn instructions() -> Selector {
    Selector::new("#instructions").expect("valid selector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_valid() {
        add_button();
        edit_button();
        save_button();
        row1();
        row1_input();
        row2_input();
        row2_save_button();
        confirmation();
        instructions();
    }
}
