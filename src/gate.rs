//! Intro overlay sequencing.
//!
//! The gate is a forward-only timeline: the progress counter runs for a
//! fixed duration, the overlay plays its two exit steps, the page is told
//! loading is over, and after a short delay the main content is mounted.
//! The caller feeds elapsed time (one animation frame at a time) and reacts
//! to the [`GateEvent`]s returned for each boundary crossed.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTimings {
    /// Progress counter from 0 to 100.
    pub progress: Duration,
    /// Overlay contents fade and shrink.
    pub content_exit: Duration,
    /// Overlay backdrop fade.
    pub overlay_exit: Duration,
    /// Gap between dismissing the overlay and mounting the page.
    pub reveal_delay: Duration,
}

impl Default for GateTimings {
    fn default() -> Self {
        Self {
            progress: Duration::from_millis(2500),
            content_exit: Duration::from_millis(800),
            overlay_exit: Duration::from_millis(600),
            reveal_delay: Duration::from_millis(100),
        }
    }
}

impl GateTimings {
    pub fn dismissed_at(&self) -> Duration {
        self.progress + self.content_exit + self.overlay_exit
    }

    pub fn revealed_at(&self) -> Duration {
        self.dismissed_at() + self.reveal_delay
    }

    fn phase_at(&self, elapsed: Duration) -> GatePhase {
        if elapsed < self.progress {
            GatePhase::Progress
        } else if elapsed < self.progress + self.content_exit {
            GatePhase::ExitingContent
        } else if elapsed < self.dismissed_at() {
            GatePhase::ExitingOverlay
        } else if elapsed < self.revealed_at() {
            GatePhase::Dismissed
        } else {
            GatePhase::Revealed
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum GatePhase {
    #[default]
    Progress,
    ExitingContent,
    ExitingOverlay,
    /// Overlay gone, page not mounted yet.
    Dismissed,
    Revealed,
}

impl GatePhase {
    fn next(self) -> Self {
        match self {
            Self::Progress => Self::ExitingContent,
            Self::ExitingContent => Self::ExitingOverlay,
            Self::ExitingOverlay => Self::Dismissed,
            Self::Dismissed | Self::Revealed => Self::Revealed,
        }
    }

    fn entry_event(self) -> Option<GateEvent> {
        match self {
            Self::ExitingContent => Some(GateEvent::ProgressComplete),
            Self::Dismissed => Some(GateEvent::Dismissed),
            Self::Revealed => Some(GateEvent::Revealed),
            Self::Progress | Self::ExitingOverlay => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    ProgressComplete,
    /// `loading` flips to false.
    Dismissed,
    /// `content_visible` flips to true.
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadingGate {
    timings: GateTimings,
    elapsed: Duration,
    phase: GatePhase,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timings(timings: GateTimings) -> Self {
        Self {
            timings,
            elapsed: Duration::ZERO,
            phase: GatePhase::Progress,
        }
    }

    /// Moves the gate to the phase for `elapsed` total time since start.
    ///
    /// Returns every boundary crossed, in order. Times earlier than the last
    /// one seen are ignored, so phases never revert.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<GateEvent> {
        if elapsed <= self.elapsed {
            return Vec::new();
        }
        self.elapsed = elapsed;
        let target = self.timings.phase_at(elapsed);
        let mut events = Vec::new();
        while self.phase < target {
            self.phase = self.phase.next();
            if let Some(event) = self.phase.entry_event() {
                events.push(event);
            }
        }
        events
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<GateEvent> {
        self.advance_to(self.elapsed + delta)
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Rounded percentage shown by the overlay.
    pub fn progress(&self) -> u8 {
        if self.phase > GatePhase::Progress || self.timings.progress.is_zero() {
            return 100;
        }
        let ratio = self.elapsed.as_secs_f64() / self.timings.progress.as_secs_f64();
        (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn is_loading(&self) -> bool {
        self.phase < GatePhase::Dismissed
    }

    pub fn content_visible(&self) -> bool {
        self.phase == GatePhase::Revealed
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_loading()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GatePhase::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_loading_and_locked() {
        let gate = LoadingGate::new();
        assert_eq!(gate.phase(), GatePhase::Progress);
        assert_eq!(gate.progress(), 0);
        assert!(gate.is_loading());
        assert!(gate.scroll_locked());
        assert!(!gate.content_visible());
    }

    #[test]
    fn progress_tracks_elapsed_time() {
        let mut gate = LoadingGate::new();
        assert!(gate.advance_to(ms(1250)).is_empty());
        assert_eq!(gate.progress(), 50);
        gate.advance_to(ms(2499));
        assert_eq!(gate.progress(), 100);
        assert_eq!(gate.phase(), GatePhase::Progress);
    }

    #[test]
    fn progress_complete_starts_exit() {
        let mut gate = LoadingGate::new();
        assert_eq!(gate.advance_to(ms(2500)), vec![GateEvent::ProgressComplete]);
        assert_eq!(gate.phase(), GatePhase::ExitingContent);
        assert!(gate.advance_to(ms(3300)).is_empty());
        assert_eq!(gate.phase(), GatePhase::ExitingOverlay);
        assert!(gate.is_loading());
    }

    #[test]
    fn reveal_follows_dismiss_after_delay() {
        let mut gate = LoadingGate::new();
        gate.advance_to(ms(3000));
        assert_eq!(gate.advance_to(ms(3900)), vec![GateEvent::Dismissed]);
        assert!(!gate.is_loading());
        assert!(!gate.scroll_locked());
        assert!(!gate.content_visible());

        assert!(gate.advance_to(ms(3999)).is_empty());
        assert_eq!(gate.advance_to(ms(4000)), vec![GateEvent::Revealed]);
        assert!(gate.content_visible());
        assert!(gate.is_finished());
    }

    #[test]
    fn large_jump_reports_every_boundary_in_order() {
        let mut gate = LoadingGate::new();
        assert_eq!(
            gate.advance_to(Duration::from_secs(60)),
            vec![
                GateEvent::ProgressComplete,
                GateEvent::Dismissed,
                GateEvent::Revealed
            ]
        );
    }

    #[test]
    fn each_transition_fires_once_per_gate() {
        let mut gate = LoadingGate::new();
        let mut events = Vec::new();
        for _ in 0..400 {
            events.extend(gate.advance_by(ms(16)));
        }
        assert_eq!(
            events,
            vec![
                GateEvent::ProgressComplete,
                GateEvent::Dismissed,
                GateEvent::Revealed
            ]
        );
        assert!(gate.advance_by(ms(1000)).is_empty());
    }

    #[test]
    fn never_reverts_when_time_goes_backwards() {
        let mut gate = LoadingGate::new();
        gate.advance_to(ms(5000));
        assert!(gate.advance_to(ms(10)).is_empty());
        assert_eq!(gate.phase(), GatePhase::Revealed);
        assert_eq!(gate.elapsed(), ms(5000));
        assert!(!gate.is_loading());
    }

    #[test]
    fn loading_and_visibility_never_overlap() {
        let mut gate = LoadingGate::new();
        for _ in 0..300 {
            gate.advance_by(ms(17));
            assert!(!(gate.is_loading() && gate.content_visible()));
        }
    }

    #[test]
    fn custom_timings_shift_boundaries() {
        let mut gate = LoadingGate::with_timings(GateTimings {
            progress: ms(100),
            content_exit: ms(10),
            overlay_exit: ms(10),
            reveal_delay: ms(5),
        });
        assert_eq!(gate.advance_to(ms(120)), vec![GateEvent::ProgressComplete, GateEvent::Dismissed]);
        assert_eq!(gate.advance_to(ms(125)), vec![GateEvent::Revealed]);
    }

    #[test]
    fn zero_progress_duration_reads_complete() {
        let gate = LoadingGate::with_timings(GateTimings {
            progress: Duration::ZERO,
            ..GateTimings::default()
        });
        assert_eq!(gate.progress(), 100);
    }
}
