use crate::error::Result;
use vigil_core::Selector;

/// High-level browser actions for scenario code.
///
/// Scenarios talk to the session through this trait where they don't
/// need handle-level control; everything resolves the selector fresh at
/// call time.
#[async_trait::async_trait]
pub trait BrowserActions {
    /// Navigate to a URL
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Fill a form field by selector
    async fn fill_field(&self, selector: &Selector, value: &str) -> Result<()>;

    /// Click an element by selector
    async fn click(&self, selector: &Selector) -> Result<()>;

    /// Extract trimmed text from an element
    async fn text_of(&self, selector: &Selector) -> Result<String>;
}
