//! Control bar buttons and their enablement.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::Phase;

/// One of the three control bar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Start,
    Stop,
    Play,
}

impl Control {
    pub fn all() -> &'static [Control] {
        &[Control::Start, Control::Stop, Control::Play]
    }

    /// Button title
    pub fn title(&self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Stop => "Stop",
            Control::Play => "Play",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Enabled flags for the control bar, derived from the session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub play: bool,
}

impl Controls {
    /// Enablement for a phase.
    ///
    /// Play is enabled as soon as recording stops, even if no locator has
    /// been delivered yet.
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Idle => Self {
                start: true,
                stop: false,
                play: false,
            },
            Phase::Recording => Self {
                start: false,
                stop: true,
                play: false,
            },
            Phase::Stopped => Self {
                start: false,
                stop: false,
                play: true,
            },
            Phase::Playing => Self {
                start: false,
                stop: false,
                play: false,
            },
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start => self.start,
            Control::Stop => self.stop,
            Control::Play => self.play,
        }
    }

    /// Controls that are currently enabled, in bar order
    pub fn enabled(&self) -> Vec<Control> {
        Control::all()
            .iter()
            .copied()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enablement_table() {
        assert_eq!(Controls::for_phase(Phase::Idle).enabled(), vec![Control::Start]);
        assert_eq!(
            Controls::for_phase(Phase::Recording).enabled(),
            vec![Control::Stop]
        );
        assert_eq!(
            Controls::for_phase(Phase::Stopped).enabled(),
            vec![Control::Play]
        );
        assert!(Controls::for_phase(Phase::Playing).enabled().is_empty());
    }

    #[test]
    fn test_at_most_one_control_enabled() {
        for phase in Phase::all() {
            assert!(Controls::for_phase(*phase).enabled().len() <= 1);
        }
    }
}
