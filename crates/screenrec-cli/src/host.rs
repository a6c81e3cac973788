//! Terminal stand-ins for the native collaborators.

use anyhow::{Context, Result};
use screenrec_core::hub::UPDATE_FILE_PATH;
use screenrec_core::{Locator, NotificationHub, PlaybackEnded, PlaybackSurface, RecorderControl};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Recorder that only reports where its output would be.
///
/// When `delivers_path` is set it mimics the native module that emits
/// `updateFilePath` shortly after recording stops.
pub struct SimulatedRecorder {
    hub: NotificationHub,
    output_path: PathBuf,
    delivery_delay: Duration,
    delivers_path: bool,
}

impl SimulatedRecorder {
    pub fn new(
        hub: NotificationHub,
        output_path: PathBuf,
        delivery_delay: Duration,
        delivers_path: bool,
    ) -> Self {
        Self {
            hub,
            output_path,
            delivery_delay,
            delivers_path,
        }
    }
}

impl RecorderControl for SimulatedRecorder {
    fn begin(&self) -> Result<()> {
        log::info!("recorder writing to {}", self.output_path.display());
        Ok(())
    }

    fn end(&self) -> Result<()> {
        if !self.delivers_path {
            return Ok(());
        }

        let runtime = tokio::runtime::Handle::try_current()
            .context("recorder needs a running Tokio runtime to deliver the capture path")?;
        let hub = self.hub.clone();
        let path = self.output_path.to_string_lossy().into_owned();
        let delay = self.delivery_delay;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let reached = hub.emit(UPDATE_FILE_PATH, Value::from(path.clone()));
            log::debug!("delivered {path} to {reached} listener(s)");
        });
        Ok(())
    }
}

/// Player that "plays" for a fixed time, then reports the end.
pub struct TimedPlayer {
    duration: Duration,
}

impl TimedPlayer {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl PlaybackSurface for TimedPlayer {
    fn load(&self, locator: &Locator, ended: PlaybackEnded) -> Result<()> {
        let runtime = tokio::runtime::Handle::try_current()
            .with_context(|| format!("cannot play {locator} without a Tokio runtime"))?;
        let duration = self.duration;
        runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            ended.signal();
        });
        Ok(())
    }
}
