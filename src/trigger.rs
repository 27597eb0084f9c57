/// Viewport line at which an element's top edge starts its entrance.
///
/// `start` is a fraction of the viewport height measured from the top, so
/// `0.85` means "when the element's top reaches 85% down the screen". The
/// reveal plays on enter, holds while the element scrolls off the top, and
/// reverses once it drops back below the start line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    start: f64,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::ITEM
    }
}

impl ScrollTrigger {
    pub const SECTION: ScrollTrigger = ScrollTrigger { start: 0.80 };
    pub const ITEM: ScrollTrigger = ScrollTrigger { start: 0.85 };
    pub const FOOTER: ScrollTrigger = ScrollTrigger { start: 0.90 };

    pub fn new(start: f64) -> Self {
        Self {
            start: start.clamp(0.0, 1.0),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// IntersectionObserver root margin that pulls the viewport's bottom
    /// edge up to the start line.
    pub fn root_margin(&self) -> String {
        let inset = ((1.0 - self.start) * 100.0).round() as u32;
        format!("0px 0px -{inset}% 0px")
    }

    pub fn next_visible(current: bool, intersecting: bool, above_viewport: bool) -> bool {
        if intersecting {
            true
        } else if above_viewport {
            current
        } else {
            false
        }
    }
}

/// Reveal status of one observed element.
///
/// The first observation has no earlier state to hold, so an element that
/// is already past the top of the viewport (a jump to an anchor below it)
/// counts as played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
    observed: bool,
}

impl RevealState {
    pub fn observe(&mut self, intersecting: bool, above_viewport: bool) -> bool {
        self.visible = if self.observed {
            ScrollTrigger::next_visible(self.visible, intersecting, above_viewport)
        } else {
            intersecting || above_viewport
        };
        self.observed = true;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_start_line() {
        assert_eq!(ScrollTrigger::ITEM.root_margin(), "0px 0px -15% 0px");
        assert_eq!(ScrollTrigger::SECTION.root_margin(), "0px 0px -20% 0px");
        assert_eq!(ScrollTrigger::FOOTER.root_margin(), "0px 0px -10% 0px");
        assert_eq!(ScrollTrigger::new(1.0).root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn start_is_clamped() {
        assert_eq!(ScrollTrigger::new(1.7).start(), 1.0);
        assert_eq!(ScrollTrigger::new(-0.2).start(), 0.0);
    }

    #[test]
    fn plays_on_enter() {
        assert!(ScrollTrigger::next_visible(false, true, false));
    }

    #[test]
    fn holds_after_scrolling_past() {
        assert!(ScrollTrigger::next_visible(true, false, true));
        assert!(!ScrollTrigger::next_visible(false, false, true));
    }

    #[test]
    fn reverses_below_start_line() {
        assert!(!ScrollTrigger::next_visible(true, false, false));
    }

    #[test]
    fn first_observation_above_viewport_plays() {
        let mut state = RevealState::default();
        assert!(state.observe(false, true));
        assert!(state.is_visible());
    }

    #[test]
    fn first_observation_below_start_line_stays_hidden() {
        let mut state = RevealState::default();
        assert!(!state.observe(false, false));
    }

    #[test]
    fn later_observations_follow_toggle_rule() {
        let mut state = RevealState::default();
        state.observe(false, false);
        assert!(state.observe(true, false));
        assert!(state.observe(false, true));
        assert!(!state.observe(false, false));
        // once observed, scrolling past while hidden keeps it hidden
        assert!(!state.observe(false, true));
    }
}
