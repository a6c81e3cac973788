//! Video playback seam.

use anyhow::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::locator::Locator;
use crate::screen::Input;

/// Surface that renders and plays a video.
pub trait PlaybackSurface: Send + Sync {
    /// Start playing `locator`. Call [`PlaybackEnded::signal`] once the
    /// video has finished.
    fn load(&self, locator: &Locator, ended: PlaybackEnded) -> Result<()>;
}

/// One-shot "ended" signal handed to the playback surface with each video.
#[derive(Debug)]
pub struct PlaybackEnded {
    inputs: UnboundedSender<Input>,
}

impl PlaybackEnded {
    pub(crate) fn new(inputs: UnboundedSender<Input>) -> Self {
        Self { inputs }
    }

    /// Report the end of playback to the screen.
    pub fn signal(self) {
        if self.inputs.send(Input::PlaybackEnded).is_err() {
            log::debug!("playback ended after the screen was dropped");
        }
    }
}
