//! Scoped browser session lifecycle.

use crate::actions::BrowserActions;
use crate::element::ElementHandle;
use crate::error::{BrowserError, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use futures_util::stream::StreamExt;
use tokio::task::JoinHandle;
use url::Url;
use vigil_core::Selector;

/// One browser session scoped to one scenario.
///
/// Each scenario receives its own session and the session owns the whole
/// browser lifecycle: Chromium process, DevTools connection, and a single
/// page. Prefer an explicit [`close`](Self::close) at the end of a
/// scenario; if an assertion panics first, dropping the session still
/// tears the browser process down.
pub struct BrowserSession {
    browser: Browser,
    page: chromiumoxide::Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a browser and open a blank page.
    pub async fn launch(config: &vigil_core::BrowserConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.window_width, config.window_height);

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(BrowserError::Chromium)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        // Drive CDP events for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        page.set_user_agent(config.user_agent.as_str())
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        tracing::debug!(
            headless = config.headless,
            width = config.window_width,
            height = config.window_height,
            "browser session launched"
        );

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Navigate the page to a URL and wait for the load to settle.
    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::info!(url = %url, "navigating");

        self.page
            .goto(url)
            .await
            .map_err(|e| BrowserError::Navigation(format!("{url}: {e}")))?;

        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| BrowserError::Navigation(format!("{url}: {e}")))?;

        Ok(())
    }

    /// Current page URL.
    pub async fn current_url(&self) -> Result<Url> {
        let url = self
            .page
            .url()
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?
            .ok_or_else(|| BrowserError::Navigation("page has no URL".to_string()))?;

        Url::parse(&url).map_err(|e| BrowserError::Navigation(format!("invalid URL {url}: {e}")))
    }

    /// Resolve a selector against the live page.
    ///
    /// `Ok(None)` means no matching node right now — distinct from a
    /// driver fault, which is `Err`. Callers polling for an element must
    /// call this on every probe instead of caching a handle across a
    /// removal/recreation boundary.
    pub async fn locate(&self, selector: &Selector) -> Result<Option<ElementHandle>> {
        match self.page.find_element(selector.as_str()).await {
            Ok(element) => Ok(Some(ElementHandle::new(element, selector.clone()))),
            Err(CdpError::NotFound) => Ok(None),
            Err(e) => Err(BrowserError::Chromium(e.to_string())),
        }
    }

    /// Resolve a selector, treating absence as an error.
    pub async fn require(&self, selector: &Selector) -> Result<ElementHandle> {
        self.locate(selector)
            .await?
            .ok_or_else(|| BrowserError::SelectorNotFound(selector.to_string()))
    }

    /// Close the page and shut the browser down.
    pub async fn close(mut self) -> Result<()> {
        tracing::debug!("closing browser session");

        self.browser
            .close()
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();

        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserActions for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.goto(url).await
    }

    async fn fill_field(&self, selector: &Selector, value: &str) -> Result<()> {
        self.require(selector).await?.send_text(value).await
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        self.require(selector).await?.click().await
    }

    async fn text_of(&self, selector: &Selector) -> Result<String> {
        self.require(selector).await?.text().await
    }
}
