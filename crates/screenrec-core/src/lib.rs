pub mod controls;
pub mod error;
pub mod hub;
pub mod keyboard;
pub mod library;
pub mod locator;
pub mod platform;
pub mod player;
pub mod recorder;
pub mod screen;
pub mod session;
pub mod settings;
pub mod source;

pub use controls::{Control, Controls};
pub use error::{Error, Result};
pub use hub::{NotificationHub, Subscription};
pub use library::{Asset, AssetQuery, AssetType, DirectoryLibrary, MediaLibrary};
pub use locator::Locator;
pub use platform::Platform;
pub use player::{PlaybackEnded, PlaybackSurface};
pub use recorder::RecorderControl;
pub use screen::{Content, Input, RecorderScreen, ScreenHandle, ScreenView};
pub use session::{Effect, Event, Phase, Session, Transition};
pub use settings::Settings;
pub use source::{VideoSource, create_video_source};
