//! Media library queries.
//!
//! The library is where the platform keeps captured media (the camera roll).
//! [`DirectoryLibrary`] treats a directory as that library, ordering assets
//! by modification time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::locator::Locator;

/// Extensions recognised as video when no list is configured
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "3gp", "webm", "mkv"];

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Video,
    Photo,
}

/// Parameters of a library query. Results are newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuery {
    /// Maximum number of assets to return
    pub count: usize,
    pub asset_type: AssetType,
}

impl AssetQuery {
    /// The single most recently captured video.
    pub const fn latest_video() -> Self {
        Self {
            count: 1,
            asset_type: AssetType::Video,
        }
    }
}

/// One entry of the media library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub locator: Locator,
    pub asset_type: AssetType,
    pub captured_at: SystemTime,
}

/// Platform media library.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Return up to `query.count` assets of the requested type, newest first.
    ///
    /// An empty result is not an error.
    async fn query(&self, query: AssetQuery) -> Result<Vec<Asset>>;
}

/// Media library backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryLibrary {
    dir: PathBuf,
    video_extensions: Vec<String>,
}

impl DirectoryLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    /// Replace the list of extensions treated as video.
    pub fn with_video_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.video_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn classify(&self, path: &Path) -> Option<AssetType> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if self.video_extensions.iter().any(|e| *e == ext) {
            Some(AssetType::Video)
        } else if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(AssetType::Photo)
        } else {
            None
        }
    }

    fn library_error(&self, source: std::io::Error) -> Error {
        Error::Library {
            path: self.dir.clone(),
            source,
        }
    }
}

#[async_trait]
impl MediaLibrary for DirectoryLibrary {
    async fn query(&self, query: AssetQuery) -> Result<Vec<Asset>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| self.library_error(e))?;

        let mut assets = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| self.library_error(e))?
        {
            let path = entry.path();
            if self.classify(&path) != Some(query.asset_type) {
                continue;
            }

            // Follows symlinks. Entries can vanish between listing and stat
            let metadata = match tokio::fs::metadata(&path).await {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                Err(e) => {
                    log::debug!("skipping {}: {e}", path.display());
                    continue;
                }
            };

            assets.push(Asset {
                locator: Locator::from_path(&path),
                asset_type: query.asset_type,
                captured_at: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            });
        }

        assets.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        assets.truncate(query.count);
        log::debug!(
            "library query {:?} in {} returned {} asset(s)",
            query,
            self.dir.display(),
            assets.len()
        );
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    fn touch(dir: &Path, name: &str, age_secs: u64) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(age_secs);
        file.set_modified(mtime).unwrap();
        path
    }

    #[tokio::test]
    async fn test_latest_video_is_newest() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "old.mp4", 300);
        let newest = touch(dir.path(), "new.MOV", 10);
        touch(dir.path(), "middle.mp4", 100);

        let library = DirectoryLibrary::new(dir.path());
        let assets = library.query(AssetQuery::latest_video()).await.unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].locator, Locator::from_path(&newest));
        assert_eq!(assets[0].asset_type, AssetType::Video);
    }

    #[tokio::test]
    async fn test_skips_non_video_entries() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt", 1);
        touch(dir.path(), "photo.jpg", 1);
        fs::create_dir(dir.path().join("nested.mp4")).unwrap();

        let library = DirectoryLibrary::new(dir.path());
        let assets = library.query(AssetQuery::latest_video()).await.unwrap();
        assert!(assets.is_empty());

        let photos = library
            .query(AssetQuery {
                count: 5,
                asset_type: AssetType::Photo,
            })
            .await
            .unwrap();
        assert_eq!(photos.len(), 1);
    }

    #[tokio::test]
    async fn test_count_limits_results() {
        let dir = tempfile::tempdir().unwrap();
        for (i, name) in ["a.mp4", "b.mp4", "c.mp4"].iter().enumerate() {
            touch(dir.path(), name, 10 * (i as u64 + 1));
        }

        let library = DirectoryLibrary::new(dir.path());
        let assets = library
            .query(AssetQuery {
                count: 2,
                asset_type: AssetType::Video,
            })
            .await
            .unwrap();
        let names: Vec<_> = assets
            .iter()
            .map(|a| Path::new(a.locator.as_str()).file_name().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["a.mp4", "b.mp4"]);
    }

    #[tokio::test]
    async fn test_custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "clip.mp4", 1);
        touch(dir.path(), "clip.avi", 1);

        let library = DirectoryLibrary::new(dir.path()).with_video_extensions([".AVI"]);
        let assets = library.query(AssetQuery::latest_video()).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets[0].locator.as_str().ends_with("clip.avi"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_videos_are_listed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let storage = tempfile::tempdir().unwrap();
        let target = touch(storage.path(), "clip.mp4", 5);
        symlink(&target, dir.path().join("linked.mp4")).unwrap();
        symlink(storage.path().join("gone.mp4"), dir.path().join("dangling.mp4")).unwrap();

        let library = DirectoryLibrary::new(dir.path());
        let assets = library.query(AssetQuery::latest_video()).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets[0].locator.as_str().ends_with("linked.mp4"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let library = DirectoryLibrary::new(dir.path().join("missing"));
        let err = library.query(AssetQuery::latest_video()).await.unwrap_err();
        assert!(matches!(err, Error::Library { .. }));
    }
}
