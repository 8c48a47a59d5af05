pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// Fetch the document at `url` and return its body as text.
    /// Invalid byte sequences in the body are replaced, not fatal.
    async fn fetch(&self, url: &str) -> Result<String>;
}
