//! Session state and the pure reducer that drives the control bar.
//!
//! A [`Session`] is an immutable value; every event produces a new session
//! plus at most one [`Effect`] for the runtime to carry out:
//!
//! ```text
//! Idle --Start--> Recording --Stop--> Stopped --Play + locator--> Playing
//!  ^                                                                |
//!  +-------------------------- playback ended ----------------------+
//! ```
//!
//! Play in `Stopped` does not move the phase by itself. It asks for an
//! [`Effect::AcquireVideo`], and the phase only advances once the runtime
//! feeds back [`Event::VideoResolved`] with a locator.
//!
//! Every Start opens a new recording generation. Acquisitions are tagged with
//! the generation that asked for them, and a resolution from an older
//! generation is dropped even if it lands while `Stopped`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::controls::{Control, Controls};
use crate::locator::Locator;

/// Discrete state of the control state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Recording,
    Stopped,
    Playing,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[Phase::Idle, Phase::Recording, Phase::Stopped, Phase::Playing]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Recording => "recording",
            Phase::Stopped => "stopped",
            Phase::Playing => "playing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the reducer reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A control bar button was pressed
    Press(Control),
    /// The native recorder delivered the path of the file it produced
    CapturePathDelivered(Locator),
    /// A video source finished resolving (None = nothing to play yet)
    VideoResolved {
        generation: u64,
        video: Option<Locator>,
    },
    /// The playback surface reached the end of the video
    PlaybackEnded,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    BeginRecording,
    EndRecording,
    /// Resolve a playable locator. `pending` is the capture path stored at
    /// the time Play was pressed; `generation` must be echoed back in
    /// [`Event::VideoResolved`].
    AcquireVideo {
        generation: u64,
        pending: Option<Locator>,
    },
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effect: Option<Effect>,
}

/// The in-progress or most recent record/playback cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    phase: Phase,
    video_uri: Option<Locator>,
    pending_capture_path: Option<Locator>,
    /// Number of recordings started. Survives the reset on playback end.
    generation: u64,
}

impl Session {
    /// Fresh session in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Locator of the video being played. Only set while `Playing`.
    pub fn video_uri(&self) -> Option<&Locator> {
        self.video_uri.as_ref()
    }

    pub fn pending_capture_path(&self) -> Option<&Locator> {
        self.pending_capture_path.as_ref()
    }

    /// Recording generation that acquisitions are checked against
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn controls(&self) -> Controls {
        Controls::for_phase(self.phase)
    }

    /// Apply an event, returning the next session and any effect to run.
    ///
    /// Pressing a disabled control, or an event that is not legal in the
    /// current phase, yields an identical session and no effect.
    pub fn reduce(&self, event: Event) -> Transition {
        match event {
            Event::Press(control) => self.press(control),
            Event::CapturePathDelivered(path) => Transition {
                session: Session {
                    pending_capture_path: Some(path),
                    ..self.clone()
                },
                effect: None,
            },
            Event::VideoResolved {
                generation,
                video: Some(uri),
            } if self.phase == Phase::Stopped && generation == self.generation => Transition {
                session: Session {
                    phase: Phase::Playing,
                    video_uri: Some(uri),
                    ..self.clone()
                },
                effect: None,
            },
            Event::PlaybackEnded if self.phase == Phase::Playing => Transition {
                session: Session {
                    generation: self.generation,
                    ..Session::new()
                },
                effect: None,
            },
            _ => self.unchanged(),
        }
    }

    fn press(&self, control: Control) -> Transition {
        if !self.controls().is_enabled(control) {
            return self.unchanged();
        }

        match control {
            // A new recording invalidates any path left from a previous one
            Control::Start => Transition {
                session: Session {
                    phase: Phase::Recording,
                    video_uri: None,
                    pending_capture_path: None,
                    generation: self.generation + 1,
                },
                effect: Some(Effect::BeginRecording),
            },
            Control::Stop => Transition {
                session: Session {
                    phase: Phase::Stopped,
                    ..self.clone()
                },
                effect: Some(Effect::EndRecording),
            },
            Control::Play => Transition {
                session: self.clone(),
                effect: Some(Effect::AcquireVideo {
                    generation: self.generation,
                    pending: self.pending_capture_path.clone(),
                }),
            },
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            session: self.clone(),
            effect: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(session: &Session, events: impl IntoIterator<Item = Event>) -> Session {
        events
            .into_iter()
            .fold(session.clone(), |s, e| s.reduce(e).session)
    }

    fn resolved(generation: u64, video: &str) -> Event {
        Event::VideoResolved {
            generation,
            video: Some(video.into()),
        }
    }

    fn assert_reset(session: &Session) {
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.video_uri().is_none());
        assert!(session.pending_capture_path().is_none());
    }

    fn in_phase(phase: Phase) -> Session {
        let idle = Session::new();
        match phase {
            Phase::Idle => idle,
            Phase::Recording => apply(&idle, [Event::Press(Control::Start)]),
            Phase::Stopped => apply(
                &idle,
                [Event::Press(Control::Start), Event::Press(Control::Stop)],
            ),
            Phase::Playing => apply(
                &idle,
                [
                    Event::Press(Control::Start),
                    Event::Press(Control::Stop),
                    resolved(1, "file://clip.mp4"),
                ],
            ),
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_reset(&session);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_start_begins_recording() {
        let t = Session::new().reduce(Event::Press(Control::Start));
        assert_eq!(t.session.phase(), Phase::Recording);
        assert_eq!(t.session.generation(), 1);
        assert_eq!(t.effect, Some(Effect::BeginRecording));
        assert!(t.session.controls().stop);
    }

    #[test]
    fn test_stop_ends_recording() {
        let t = in_phase(Phase::Recording).reduce(Event::Press(Control::Stop));
        assert_eq!(t.session.phase(), Phase::Stopped);
        assert_eq!(t.effect, Some(Effect::EndRecording));
        assert!(t.session.controls().play);
    }

    #[test]
    fn test_play_requests_acquisition_without_moving() {
        let stopped = apply(
            &in_phase(Phase::Stopped),
            [Event::CapturePathDelivered("/sdcard/video.mp4".into())],
        );
        let t = stopped.reduce(Event::Press(Control::Play));
        assert_eq!(t.session.phase(), Phase::Stopped);
        assert_eq!(
            t.effect,
            Some(Effect::AcquireVideo {
                generation: 1,
                pending: Some("/sdcard/video.mp4".into())
            })
        );
    }

    #[test]
    fn test_disabled_presses_are_noops() {
        for phase in Phase::all() {
            let session = in_phase(*phase);
            for control in Control::all() {
                if session.controls().is_enabled(*control) {
                    continue;
                }
                let t = session.reduce(Event::Press(*control));
                assert_eq!(t.session, session, "{control} in {phase}");
                assert!(t.effect.is_none(), "{control} in {phase}");
            }
        }
    }

    #[test]
    fn test_video_uri_only_while_playing() {
        for phase in Phase::all() {
            let session = in_phase(*phase);
            assert_eq!(session.video_uri().is_some(), *phase == Phase::Playing);
        }
    }

    #[test]
    fn test_empty_resolution_stays_stopped() {
        let stopped = in_phase(Phase::Stopped);
        let t = stopped.reduce(Event::VideoResolved {
            generation: stopped.generation(),
            video: None,
        });
        assert_eq!(t.session, stopped);
    }

    #[test]
    fn test_resolution_ignored_outside_stopped() {
        for phase in [Phase::Idle, Phase::Recording, Phase::Playing] {
            let session = in_phase(phase);
            let t = session.reduce(resolved(session.generation(), "file://late.mp4"));
            assert_eq!(t.session, session);
        }
    }

    #[test]
    fn test_resolution_from_older_recording_is_dropped() {
        let first = in_phase(Phase::Stopped);
        let Some(Effect::AcquireVideo { generation, .. }) =
            first.reduce(Event::Press(Control::Play)).effect
        else {
            panic!("play should request a video");
        };

        // The first cycle plays from another query, ends, and a new one starts
        let second = apply(
            &first,
            [
                resolved(generation, "file://clip1.mp4"),
                Event::PlaybackEnded,
                Event::Press(Control::Start),
                Event::Press(Control::Stop),
            ],
        );
        assert_eq!(second.phase(), Phase::Stopped);

        let t = second.reduce(resolved(generation, "file://clip0.mp4"));
        assert_eq!(t.session, second);
        assert!(t.effect.is_none());

        let playing = second.reduce(resolved(second.generation(), "file://clip2.mp4"));
        assert_eq!(playing.session.phase(), Phase::Playing);
    }

    #[test]
    fn test_capture_path_before_stop_keeps_phase() {
        let recording = in_phase(Phase::Recording);
        let t = recording.reduce(Event::CapturePathDelivered("/tmp/a.mp4".into()));
        assert_eq!(t.session.phase(), Phase::Recording);
        assert_eq!(
            t.session.pending_capture_path(),
            Some(&Locator::from("/tmp/a.mp4"))
        );

        let stopped = t.session.reduce(Event::Press(Control::Stop)).session;
        assert_eq!(
            stopped.pending_capture_path(),
            Some(&Locator::from("/tmp/a.mp4"))
        );
    }

    #[test]
    fn test_start_clears_stale_capture_path() {
        let idle = apply(
            &Session::new(),
            [Event::CapturePathDelivered("/tmp/old.mp4".into())],
        );
        let recording = idle.reduce(Event::Press(Control::Start)).session;
        assert!(recording.pending_capture_path().is_none());
    }

    #[test]
    fn test_playback_end_resets_everything() {
        let playing = apply(
            &in_phase(Phase::Stopped),
            [
                Event::CapturePathDelivered("/tmp/a.mp4".into()),
                resolved(1, "/tmp/a.mp4"),
            ],
        );
        assert_eq!(playing.phase(), Phase::Playing);

        let t = playing.reduce(Event::PlaybackEnded);
        assert_reset(&t.session);
        assert_eq!(t.session.generation(), 1);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_playback_end_outside_playing_is_ignored() {
        let stopped = in_phase(Phase::Stopped);
        assert_eq!(stopped.reduce(Event::PlaybackEnded).session, stopped);
    }

    #[test]
    fn test_two_cycles_are_identical() {
        let cycle = |generation| {
            [
                Event::Press(Control::Start),
                Event::Press(Control::Stop),
                resolved(generation, "file://clip1.mp4"),
                Event::PlaybackEnded,
            ]
        };
        let after_one = apply(&Session::new(), cycle(1));
        let after_two = apply(&after_one, cycle(2));
        assert_reset(&after_one);
        assert_reset(&after_two);
        assert_eq!(after_two.generation(), 2);
    }
}
