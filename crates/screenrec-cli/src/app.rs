use screenrec_core::{
    DirectoryLibrary, MediaLibrary, NotificationHub, Platform, RecorderScreen, Settings,
    create_video_source,
};
use std::sync::Arc;
use std::time::Duration;

use crate::args::Overrides;
use crate::host::{SimulatedRecorder, TimedPlayer};

/// Apply command line overrides on top of loaded settings.
pub fn apply_overrides(settings: &mut Settings, overrides: &Overrides) {
    if let Some(platform) = overrides.platform {
        settings.platform = platform;
    }
    if let Some(dir) = &overrides.library_dir {
        settings.library.dir = Some(dir.clone());
    }
    if let Some(path) = &overrides.capture_path {
        settings.capture.output_path = Some(path.clone());
    }
    if let Some(secs) = overrides.play_secs {
        settings.ui.play_secs = secs;
    }
    if let Some(enabled) = overrides.keyboard_bar {
        settings.ui.keyboard_bar = Some(enabled);
    }
}

/// Media library for the configured directory, if there is one.
pub fn media_library(settings: &Settings) -> Option<Arc<dyn MediaLibrary>> {
    let dir = settings.library.resolved_dir()?;
    let library =
        DirectoryLibrary::new(dir).with_video_extensions(settings.library.extensions.iter());
    Some(Arc::new(library))
}

/// Wire the screen with the terminal collaborators for `settings`.
pub fn build_screen(settings: &Settings, hub: &NotificationHub) -> RecorderScreen {
    let library = match settings.platform {
        Platform::IOS => media_library(settings),
        _ => None,
    };
    let source = create_video_source(settings.platform, library);

    let recorder = SimulatedRecorder::new(
        hub.clone(),
        settings.capture.resolved_output_path(),
        Duration::from_millis(settings.capture.delivery_delay_ms),
        settings.platform == Platform::Android,
    );
    let player = TimedPlayer::new(Duration::from_secs(settings.ui.play_secs));

    RecorderScreen::new(source, Arc::new(recorder), Arc::new(player))
        .with_keyboard_bar(settings.keyboard_bar())
}
