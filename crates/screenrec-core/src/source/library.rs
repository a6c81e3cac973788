use async_trait::async_trait;
use std::sync::Arc;

use super::VideoSource;
use crate::error::Result;
use crate::library::{AssetQuery, MediaLibrary};
use crate::locator::Locator;

/// Plays the most recently captured video in the media library.
///
/// Ignores the pending capture path entirely; the library is the source of
/// truth on platforms that use this strategy.
#[derive(Clone)]
pub struct LibraryQuerySource {
    library: Arc<dyn MediaLibrary>,
}

impl LibraryQuerySource {
    pub fn new(library: Arc<dyn MediaLibrary>) -> Self {
        Self { library }
    }
}

#[async_trait]
impl VideoSource for LibraryQuerySource {
    fn name(&self) -> &'static str {
        "library-query"
    }

    async fn acquire(&self, _pending: Option<&Locator>) -> Result<Option<Locator>> {
        let assets = self.library.query(AssetQuery::latest_video()).await?;
        Ok(assets.into_iter().next().map(|asset| asset.locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Asset, AssetType};
    use std::sync::Mutex;
    use std::time::SystemTime;

    /// Library returning a fixed list and recording the queries it saw
    struct FixedLibrary {
        assets: Vec<Asset>,
        queries: Mutex<Vec<AssetQuery>>,
    }

    impl FixedLibrary {
        fn new(locators: &[&str]) -> Self {
            Self {
                assets: locators
                    .iter()
                    .map(|l| Asset {
                        locator: Locator::from(*l),
                        asset_type: AssetType::Video,
                        captured_at: SystemTime::now(),
                    })
                    .collect(),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MediaLibrary for FixedLibrary {
        async fn query(&self, query: AssetQuery) -> Result<Vec<Asset>> {
            self.queries.lock().unwrap().push(query);
            Ok(self.assets.iter().take(query.count).cloned().collect())
        }
    }

    #[tokio::test]
    async fn test_first_asset_wins() {
        let library = Arc::new(FixedLibrary::new(&["file://clip1.mp4", "file://clip0.mp4"]));
        let source = LibraryQuerySource::new(library.clone());

        let resolved = source.acquire(None).await.unwrap();
        assert_eq!(resolved, Some(Locator::from("file://clip1.mp4")));
        assert_eq!(
            library.queries.lock().unwrap().as_slice(),
            &[AssetQuery::latest_video()]
        );
    }

    #[tokio::test]
    async fn test_empty_library_resolves_nothing() {
        let source = LibraryQuerySource::new(Arc::new(FixedLibrary::new(&[])));
        let pending = Locator::from("/ignored.mp4");
        assert_eq!(source.acquire(Some(&pending)).await.unwrap(), None);
    }
}
