use async_trait::async_trait;

use super::VideoSource;
use crate::error::Result;
use crate::locator::Locator;

/// Plays whatever capture path the native recorder delivered.
///
/// The path arrives through the `updateFilePath` notification, possibly
/// after Play was pressed. Until it does, there is nothing to play.
#[derive(Debug, Default, Clone)]
pub struct EventDeliveredSource;

#[async_trait]
impl VideoSource for EventDeliveredSource {
    fn name(&self) -> &'static str {
        "event-delivered"
    }

    async fn acquire(&self, pending: Option<&Locator>) -> Result<Option<Locator>> {
        Ok(pending.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_adopts_pending_path() {
        let path = Locator::from("/sdcard/Download/video.mp4");
        let resolved = EventDeliveredSource.acquire(Some(&path)).await.unwrap();
        assert_eq!(resolved, Some(path));
    }

    #[tokio::test]
    async fn test_nothing_before_delivery() {
        assert_eq!(EventDeliveredSource.acquire(None).await.unwrap(), None);
    }
}
