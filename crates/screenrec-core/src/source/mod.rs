//! Video acquisition strategies.
//!
//! # Architecture
//!
//! ```text
//! VideoSource Trait
//!   ├── EventDeliveredSource  - capture path pushed by the native recorder
//!   ├── LibraryQuerySource    - newest video in the media library
//!   └── NoopSource            - platforms without a strategy
//! ```
//!
//! The session reducer stays platform-agnostic: it only asks for a locator
//! through [`crate::session::Effect::AcquireVideo`], and whichever source was
//! chosen at startup answers.

mod event;
mod library;
mod noop;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::library::MediaLibrary;
use crate::locator::Locator;
use crate::platform::Platform;

pub use event::EventDeliveredSource;
pub use library::LibraryQuerySource;
pub use noop::NoopSource;

/// Capability that turns a Play press into a playable locator.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Resolve the video to play.
    ///
    /// `pending` is the capture path the native recorder delivered for the
    /// current session, if any. `Ok(None)` means there is nothing to play yet.
    async fn acquire(&self, pending: Option<&Locator>) -> Result<Option<Locator>>;
}

/// Select the video source for a platform.
///
/// `library` is only used by platforms that query the media library; passing
/// `None` there degrades to [`NoopSource`].
pub fn create_video_source(
    platform: Platform,
    library: Option<Arc<dyn MediaLibrary>>,
) -> Arc<dyn VideoSource> {
    match (platform, library) {
        (Platform::Android, _) => Arc::new(EventDeliveredSource),
        (Platform::IOS, Some(library)) => Arc::new(LibraryQuerySource::new(library)),
        (Platform::IOS, None) => {
            log::warn!("no media library available; Play will do nothing");
            Arc::new(NoopSource)
        }
        (Platform::Other, _) => Arc::new(NoopSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::DirectoryLibrary;

    #[test]
    fn test_factory_selects_by_platform() {
        let library: Arc<dyn MediaLibrary> = Arc::new(DirectoryLibrary::new("/nonexistent"));

        assert_eq!(
            create_video_source(Platform::Android, None).name(),
            "event-delivered"
        );
        assert_eq!(
            create_video_source(Platform::IOS, Some(library.clone())).name(),
            "library-query"
        );
        assert_eq!(create_video_source(Platform::IOS, None).name(), "noop");
        assert_eq!(create_video_source(Platform::Other, Some(library)).name(), "noop");
    }
}
