//! Persistent settings for the recorder screen.
//!
//! Stored as JSON in `<config_dir>/screenrec/settings.json`. Missing fields
//! fall back to defaults, so older files keep loading.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::library::DEFAULT_VIDEO_EXTENSIONS;
use crate::platform::Platform;

/// Environment variable overriding the stored platform
pub const PLATFORM_ENV_VAR: &str = "SCREENREC_PLATFORM";

const SETTINGS_DIR: &str = "screenrec";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Platform whose video acquisition strategy is used
    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub capture: CaptureSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the media library lives and what counts as video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibrarySettings {
    /// Library directory (None = the system video directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_VIDEO_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: None,
            extensions: default_extensions(),
        }
    }
}

impl LibrarySettings {
    /// Configured directory, or the system video directory.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(dirs::video_dir)
    }
}

/// Output of the native recorder (used by the event-delivered strategy).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureSettings {
    /// File the recorder writes (None = `<download_dir>/video.mp4`)
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Delay between stopping and delivering `updateFilePath`
    #[serde(default = "default_delivery_delay_ms")]
    pub delivery_delay_ms: u64,
}

fn default_delivery_delay_ms() -> u64 {
    300
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            output_path: None,
            delivery_delay_ms: default_delivery_delay_ms(),
        }
    }
}

impl CaptureSettings {
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            dirs::download_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("video.mp4")
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiSettings {
    /// Duplicate the control bar above the content while the soft keyboard is
    /// shown (None = platform default)
    #[serde(default)]
    pub keyboard_bar: Option<bool>,

    /// How long the player runs before reporting the end of a video
    #[serde(default = "default_play_secs")]
    pub play_secs: u64,
}

fn default_play_secs() -> u64 {
    5
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            keyboard_bar: None,
            play_secs: default_play_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            library: LibrarySettings::default(),
            capture: CaptureSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    /// Path of the settings file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable. Applies the environment override.
    pub fn load() -> Self {
        let settings = match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring settings at {}: {e}", path.display());
                Self::default()
            }),
            _ => Self::default(),
        };
        settings.with_platform_override(std::env::var(PLATFORM_ENV_VAR).ok().as_deref())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()
            .ok_or_else(|| Error::Settings("no config directory on this system".to_string()))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Whether the duplicate keyboard control bar is enabled
    pub fn keyboard_bar(&self) -> bool {
        self.ui
            .keyboard_bar
            .unwrap_or_else(|| self.platform.shows_keyboard_bar())
    }

    /// Replace the platform with `value` (the `SCREENREC_PLATFORM` value) when
    /// it parses. An unknown name is logged and the stored platform kept.
    pub fn with_platform_override(mut self, value: Option<&str>) -> Self {
        match value.map(str::parse::<Platform>) {
            Some(Ok(platform)) => self.platform = platform,
            Some(Err(e)) => log::warn!("{PLATFORM_ENV_VAR}: {e}"),
            None => {}
        }
        self
    }
}
