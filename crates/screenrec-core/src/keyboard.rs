//! Soft keyboard visibility.
//!
//! Purely cosmetic: when enabled for the platform, a visible keyboard adds a
//! second control bar above the content. It never touches the session.

/// Tracks whether the soft keyboard is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardLayer {
    enabled: bool,
    shown: bool,
}

impl KeyboardLayer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            shown: false,
        }
    }

    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether the duplicate control bar should be drawn above the content
    pub fn shows_top_bar(&self) -> bool {
        self.enabled && self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_bar_needs_both_flags() {
        let mut layer = KeyboardLayer::new(true);
        assert!(!layer.shows_top_bar());
        layer.set_shown(true);
        assert!(layer.shows_top_bar());
        layer.set_shown(false);
        assert!(!layer.shows_top_bar());
    }

    #[test]
    fn test_disabled_layer_tracks_but_never_shows() {
        let mut layer = KeyboardLayer::new(false);
        layer.set_shown(true);
        assert!(layer.is_shown());
        assert!(!layer.shows_top_bar());
    }
}
