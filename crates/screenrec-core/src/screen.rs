//! The recorder screen: session, collaborators and subscriptions in one place.
//!
//! All inputs (button presses, notifications, resolved videos, playback end)
//! go through a single channel and are applied one at a time, so the session
//! is never mutated concurrently. Video acquisition runs on a spawned task and
//! reports back through the same channel; other inputs keep flowing while a
//! library query is in flight.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::controls::{Control, Controls};
use crate::hub::{
    KEYBOARD_DID_HIDE, KEYBOARD_DID_SHOW, NotificationHub, Subscription, UPDATE_FILE_PATH,
};
use crate::keyboard::KeyboardLayer;
use crate::locator::Locator;
use crate::player::{PlaybackEnded, PlaybackSurface};
use crate::recorder::RecorderControl;
use crate::session::{Effect, Event, Phase, Session, Transition};
use crate::source::VideoSource;

/// Anything the screen reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Press(Control),
    /// `updateFilePath` from the native recorder
    CapturePath(Locator),
    /// Outcome of a video acquisition (None = nothing to play), tagged with
    /// the recording generation that asked for it
    VideoResolved {
        generation: u64,
        video: Option<Locator>,
    },
    PlaybackEnded,
    KeyboardShown(bool),
    /// New content of the text entry
    TextChanged(String),
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Player(Locator),
    TextEntry(String),
}

/// Render model of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub phase: Phase,
    pub controls: Controls,
    /// Duplicate control bar above the content (soft keyboard visible)
    pub top_bar: bool,
    pub content: Content,
}

/// Cloneable sender for feeding inputs to a screen from other tasks.
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    inputs: UnboundedSender<Input>,
}

impl ScreenHandle {
    /// Queue an input. Returns false if the screen is gone.
    pub fn send(&self, input: Input) -> bool {
        self.inputs.send(input).is_ok()
    }

    pub fn press(&self, control: Control) -> bool {
        self.send(Input::Press(control))
    }

    pub fn set_text(&self, text: impl Into<String>) -> bool {
        self.send(Input::TextChanged(text.into()))
    }
}

pub struct RecorderScreen {
    session: Session,
    keyboard: KeyboardLayer,
    text: String,
    source: Arc<dyn VideoSource>,
    recorder: Arc<dyn RecorderControl>,
    player: Arc<dyn PlaybackSurface>,
    inputs_tx: UnboundedSender<Input>,
    inputs_rx: UnboundedReceiver<Input>,
    subscriptions: Vec<Subscription>,
}

impl RecorderScreen {
    pub fn new(
        source: Arc<dyn VideoSource>,
        recorder: Arc<dyn RecorderControl>,
        player: Arc<dyn PlaybackSurface>,
    ) -> Self {
        let (inputs_tx, inputs_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            keyboard: KeyboardLayer::default(),
            text: String::new(),
            source,
            recorder,
            player,
            inputs_tx,
            inputs_rx,
            subscriptions: Vec::new(),
        }
    }

    /// Enable the duplicate control bar while the soft keyboard is shown.
    pub fn with_keyboard_bar(mut self, enabled: bool) -> Self {
        self.keyboard = KeyboardLayer::new(enabled);
        self
    }

    pub fn handle(&self) -> ScreenHandle {
        ScreenHandle {
            inputs: self.inputs_tx.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Subscribe to the capture path and keyboard notifications.
    ///
    /// Mounting twice replaces the previous subscriptions.
    pub fn mount(&mut self, hub: &NotificationHub) {
        self.unmount();

        let tx = self.inputs_tx.clone();
        let capture = hub.listen(UPDATE_FILE_PATH, move |payload: &Value| {
            match payload.as_str() {
                Some(path) => {
                    let _ = tx.send(Input::CapturePath(Locator::new(path)));
                }
                None => log::warn!("ignoring {UPDATE_FILE_PATH} without a path: {payload}"),
            }
        });

        let tx = self.inputs_tx.clone();
        let shown = hub.listen(KEYBOARD_DID_SHOW, move |_| {
            let _ = tx.send(Input::KeyboardShown(true));
        });

        let tx = self.inputs_tx.clone();
        let hidden = hub.listen(KEYBOARD_DID_HIDE, move |_| {
            let _ = tx.send(Input::KeyboardShown(false));
        });

        self.subscriptions = vec![capture, shown, hidden];
        log::debug!("screen mounted with {} video source", self.source.name());
    }

    /// Release every subscription taken by [`RecorderScreen::mount`].
    pub fn unmount(&mut self) {
        if !self.subscriptions.is_empty() {
            self.subscriptions.clear();
            log::debug!("screen unmounted");
        }
    }

    /// Wait for the next input and apply it.
    pub async fn step(&mut self) {
        if let Some(input) = self.inputs_rx.recv().await {
            self.apply(input);
        }
    }

    /// Apply every input already queued without waiting. Returns how many
    /// were applied.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(input) = self.inputs_rx.try_recv() {
            self.apply(input);
            applied += 1;
        }
        applied
    }

    /// Apply one input.
    ///
    /// Must run inside a Tokio runtime: video acquisition is spawned.
    pub fn apply(&mut self, input: Input) {
        let event = match input {
            Input::Press(control) => Event::Press(control),
            Input::CapturePath(path) => Event::CapturePathDelivered(path),
            Input::VideoResolved { generation, video } => {
                Event::VideoResolved { generation, video }
            }
            Input::PlaybackEnded => Event::PlaybackEnded,
            Input::KeyboardShown(shown) => {
                self.keyboard.set_shown(shown);
                return;
            }
            Input::TextChanged(text) => {
                // The text entry is not on screen while a video plays
                if self.session.video_uri().is_none() {
                    self.text = text;
                }
                return;
            }
        };

        let before = self.session.phase();
        let rejected_press = match &event {
            Event::Press(control) if !self.session.controls().is_enabled(*control) => Some(*control),
            _ => None,
        };

        let Transition { session, effect } = self.session.reduce(event);
        self.session = session;
        let after = self.session.phase();

        if let Some(control) = rejected_press {
            log::trace!("{control} is disabled while {before}");
        }
        if before != after {
            log::debug!("phase {before} -> {after}");
        }
        if after == Phase::Playing && before != Phase::Playing {
            self.start_playback();
        }
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    pub fn view(&self) -> ScreenView {
        let content = match self.session.video_uri() {
            Some(uri) => Content::Player(uri.clone()),
            None => Content::TextEntry(self.text.clone()),
        };
        ScreenView {
            phase: self.session.phase(),
            controls: self.session.controls(),
            top_bar: self.keyboard.shows_top_bar(),
            content,
        }
    }

    fn start_playback(&self) {
        let Some(uri) = self.session.video_uri() else {
            return;
        };
        log::info!("playing {uri}");

        let ended = PlaybackEnded::new(self.inputs_tx.clone());
        if let Err(e) = self.player.load(uri, ended) {
            // Nothing will ever signal the end, so reset right away
            log::warn!("playback of {uri} failed: {e:#}");
            let _ = self.inputs_tx.send(Input::PlaybackEnded);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::BeginRecording => {
                log::info!("recording started");
                if let Err(e) = self.recorder.begin() {
                    log::warn!("recorder failed to start: {e:#}");
                }
            }
            Effect::EndRecording => {
                log::info!("recording stopped");
                if let Err(e) = self.recorder.end() {
                    log::warn!("recorder failed to stop: {e:#}");
                }
            }
            Effect::AcquireVideo {
                generation,
                pending,
            } => {
                let source = Arc::clone(&self.source);
                let tx = self.inputs_tx.clone();
                tokio::spawn(async move {
                    let video = match source.acquire(pending.as_ref()).await {
                        Ok(video) => video,
                        Err(e) => {
                            log::warn!("{} source failed: {e}", source.name());
                            None
                        }
                    };
                    if video.is_none() {
                        log::debug!("{} source has nothing to play yet", source.name());
                    }
                    let _ = tx.send(Input::VideoResolved { generation, video });
                });
            }
        }
    }
}
