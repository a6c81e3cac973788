use async_trait::async_trait;

use super::VideoSource;
use crate::error::Result;
use crate::locator::Locator;

/// Source for platforms without an acquisition strategy
#[derive(Debug, Default, Clone)]
pub struct NoopSource;

#[async_trait]
impl VideoSource for NoopSource {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn acquire(&self, _pending: Option<&Locator>) -> Result<Option<Locator>> {
        Ok(None)
    }
}
