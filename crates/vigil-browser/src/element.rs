//! Element handles with stale-aware state queries.

use crate::error::{BrowserError, Result};
use chromiumoxide::Element;
use serde_json::Value;
use vigil_core::Selector;

const IS_ATTACHED_FN: &str = "function() { return this.isConnected; }";

const IS_VISIBLE_FN: &str = r"function() {
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') { return false; }
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}";

const IS_ENABLED_FN: &str = "function() { return !this.disabled; }";

const VALUE_FN: &str = "function() { return this.value; }";

const CLEAR_FN: &str = r"function() {
    this.value = '';
    this.dispatchEvent(new Event('input', { bubbles: true }));
    this.dispatchEvent(new Event('change', { bubbles: true }));
}";

/// A handle to one located element.
///
/// The handle refers to the DOM node as it was at locate time. When the
/// page replaces that node, the handle goes stale: [`is_attached`]
/// reports `false` rather than erroring, and a fresh handle must be
/// obtained by re-resolving the selector through the session.
///
/// [`is_attached`]: ElementHandle::is_attached
pub struct ElementHandle {
    inner: Element,
    selector: Selector,
}

impl std::fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementHandle")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl ElementHandle {
    pub(crate) fn new(inner: Element, selector: Selector) -> Self {
        Self { inner, selector }
    }

    /// The selector this handle was resolved from.
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Whether the node is still part of the page structure.
    ///
    /// A detached (stale) node answers `false`; so does a node the
    /// driver can no longer address at all.
    pub async fn is_attached(&self) -> bool {
        match self.inner.call_js_fn(IS_ATTACHED_FN, false).await {
            Ok(ret) => Self::bool_value(&ret.result.value),
            Err(_) => false,
        }
    }

    /// Whether the element is attached and currently rendered.
    pub async fn is_visible(&self) -> Result<bool> {
        if !self.is_attached().await {
            return Ok(false);
        }

        let ret = self
            .inner
            .call_js_fn(IS_VISIBLE_FN, false)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        Ok(Self::bool_value(&ret.result.value))
    }

    /// Whether the element accepts interaction (not `disabled`).
    pub async fn is_enabled(&self) -> Result<bool> {
        let ret = self
            .inner
            .call_js_fn(IS_ENABLED_FN, false)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        Ok(Self::bool_value(&ret.result.value))
    }

    /// Visible text content, trimmed.
    pub async fn text(&self) -> Result<String> {
        let text = self
            .inner
            .inner_text()
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        Ok(text.map(|s| s.trim().to_string()).unwrap_or_default())
    }

    /// Current value of an input element.
    pub async fn value(&self) -> Result<String> {
        let ret = self
            .inner
            .call_js_fn(VALUE_FN, false)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;

        Ok(ret
            .result
            .value
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Read an attribute from the element.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner
            .attribute(name)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))
    }

    /// Click the element.
    pub async fn click(&self) -> Result<()> {
        tracing::debug!(selector = %self.selector, "click");
        self.inner
            .click()
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;
        Ok(())
    }

    /// Focus the element and type text into it.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        tracing::debug!(selector = %self.selector, "send text");
        self.inner
            .focus()
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;
        self.inner
            .type_str(text)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;
        Ok(())
    }

    /// Clear an input element's value.
    pub async fn clear(&self) -> Result<()> {
        tracing::debug!(selector = %self.selector, "clear");
        self.inner
            .call_js_fn(CLEAR_FN, false)
            .await
            .map_err(|e| BrowserError::Chromium(e.to_string()))?;
        Ok(())
    }

    fn bool_value(value: &Option<Value>) -> bool {
        value.as_ref().and_then(Value::as_bool).unwrap_or(false)
    }
}
