use std::sync::Arc;

use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
        }
    }

    /// Build a context around a custom fetcher. Used by tests to feed
    /// canned documents through the pipeline without a network.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
