use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Host platforms the screen knows how to acquire videos on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Native recorder pushes the capture path through `updateFilePath`
    Android,
    /// Most recent video is looked up in the media library
    #[serde(rename = "ios")]
    IOS,
    /// No acquisition strategy; Play does nothing
    Other,
}

impl Platform {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::IOS
        } else {
            Platform::Other
        }
    }

    /// Get the string identifier for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::IOS => "ios",
            Platform::Other => "other",
        }
    }

    /// List all known platforms
    pub fn all() -> &'static [Platform] {
        &[Platform::Android, Platform::IOS, Platform::Other]
    }

    /// Whether a soft keyboard duplicates the control bar above the content.
    pub fn shows_keyboard_bar(&self) -> bool {
        matches!(self, Platform::IOS)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::IOS),
            "other" | "none" => Ok(Platform::Other),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}
