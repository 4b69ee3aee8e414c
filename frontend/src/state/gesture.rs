use std::collections::VecDeque;

use crate::config::{DRAG_START_DISTANCE, VELOCITY_WINDOW_MS};

/// Horizontal drag tracking from raw pointer samples.
///
/// Offsets are in px relative to where the pointer went down. Velocity is in
/// px/s, taken across the samples of the last `VELOCITY_WINDOW_MS`, so a
/// release that repeats the final move position still reports the speed of
/// the drag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    origin_x: f64,
    samples: VecDeque<(f64, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub offset_x: f64,
    pub velocity_x: f64,
}

impl DragTracker {
    pub fn begin(x: f64, time_ms: f64) -> Self {
        Self {
            origin_x: x,
            samples: VecDeque::from([(x, time_ms)]),
        }
    }

    pub fn is_tracking(&self) -> bool {
        !self.samples.is_empty()
    }

    pub fn offset_x(&self) -> f64 {
        self.samples.back().map_or(0.0, |&(x, _)| x - self.origin_x)
    }

    pub fn sample(&mut self, x: f64, time_ms: f64) {
        if !self.is_tracking() {
            return;
        }
        self.samples.push_back((x, time_ms));
        // Always keep two samples so a slow drag still has a velocity.
        let cutoff = time_ms - VELOCITY_WINDOW_MS;
        while self.samples.len() > 2 && self.samples.front().map_or(false, |&(_, t)| t < cutoff) {
            self.samples.pop_front();
        }
    }

    pub fn velocity_x(&self) -> f64 {
        match (self.samples.front(), self.samples.back()) {
            (Some(&(x0, t0)), Some(&(x1, t1))) if t1 > t0 => (x1 - x0) / (t1 - t0) * 1000.0,
            _ => 0.0,
        }
    }

    /// Finishes the gesture; `None` if nothing was being tracked.
    pub fn release(&mut self, x: f64, time_ms: f64) -> Option<DragRelease> {
        if !self.is_tracking() {
            return None;
        }
        self.sample(x, time_ms);
        let release = DragRelease {
            offset_x: self.offset_x(),
            velocity_x: self.velocity_x(),
        };
        *self = Self::default();
        Some(release)
    }
}

/// Where a pointer move left an ongoing drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMotion {
    pub offset_x: f64,
    /// Set on the move that crossed `DRAG_START_DISTANCE`.
    pub started: Option<usize>,
}

/// One press on a card, from pointer down to up or leave.
///
/// Tells a drag apart from a click: the press only becomes a drag after
/// `DRAG_START_DISTANCE` of travel, and the click the browser fires right
/// after a drag release is swallowed. A new press clears any leftover swallow,
/// so a drag that ended by leaving the card never eats a later click.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerSession {
    tracker: DragTracker,
    card: Option<usize>,
    dragging: bool,
    swallow_click: bool,
}

impl PointerSession {
    pub fn press(&mut self, card: usize, x: f64, time_ms: f64) {
        *self = Self {
            tracker: DragTracker::begin(x, time_ms),
            card: Some(card),
            ..Self::default()
        };
    }

    /// `None` while no press is held or it hasn't travelled far enough yet.
    pub fn motion(&mut self, x: f64, time_ms: f64) -> Option<PointerMotion> {
        if !self.tracker.is_tracking() {
            return None;
        }
        self.tracker.sample(x, time_ms);
        let offset_x = self.tracker.offset_x();
        let started = match self.card {
            Some(card) if !self.dragging && offset_x.abs() >= DRAG_START_DISTANCE => {
                self.dragging = true;
                Some(card)
            }
            _ => None,
        };
        self.dragging.then_some(PointerMotion { offset_x, started })
    }

    /// Ends the press. Only a drag yields a release.
    pub fn finish(&mut self, x: f64, time_ms: f64) -> Option<DragRelease> {
        let release = self.tracker.release(x, time_ms);
        self.card = None;
        if !std::mem::take(&mut self.dragging) {
            return None;
        }
        self.swallow_click = true;
        release
    }

    /// Whether the click now arriving belongs to a finished drag. Clears the flag.
    pub fn take_swallowed_click(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::card_stack::{classify_swipe, SwipeOutcome};

    #[test]
    fn offset_is_relative_to_press_point() {
        let mut drag = DragTracker::begin(200.0, 0.0);
        drag.sample(150.0, 16.0);
        assert_eq!(drag.offset_x(), -50.0);
    }

    #[test]
    fn velocity_drops_samples_outside_the_window() {
        let mut drag = DragTracker::begin(0.0, 0.0);
        drag.sample(10.0, 100.0);
        drag.sample(30.0, 110.0);
        assert_eq!(drag.velocity_x(), 2000.0);
    }

    #[test]
    fn release_reports_and_resets() {
        let mut drag = DragTracker::begin(100.0, 0.0);
        drag.sample(90.0, 50.0);
        let release = drag.release(40.0, 100.0).unwrap();
        assert_eq!(release.offset_x, -60.0);
        assert_eq!(release.velocity_x, -600.0);
        assert!(!drag.is_tracking());
        assert!(drag.release(0.0, 200.0).is_none());
    }

    #[test]
    fn release_at_last_move_position_keeps_drag_speed() {
        let mut drag = DragTracker::begin(100.0, 0.0);
        drag.sample(90.0, 8.0);
        drag.sample(80.0, 16.0);
        let release = drag.release(80.0, 24.0).unwrap();
        assert_eq!(release.offset_x, -20.0);
        assert!((release.velocity_x - -833.333).abs() < 0.01);
        assert_eq!(classify_swipe(release.offset_x, release.velocity_x), SwipeOutcome::Advance);
    }

    #[test]
    fn slow_drag_keeps_two_samples() {
        let mut drag = DragTracker::begin(0.0, 0.0);
        drag.sample(-40.0, 400.0);
        assert_eq!(drag.velocity_x(), -100.0);
    }

    #[test]
    fn same_timestamp_gives_zero_velocity() {
        let mut drag = DragTracker::begin(0.0, 5.0);
        let release = drag.release(20.0, 5.0).unwrap();
        assert_eq!(release.velocity_x, 0.0);
        assert_eq!(release.offset_x, 20.0);
    }

    #[test]
    fn samples_before_begin_are_ignored() {
        let mut drag = DragTracker::default();
        drag.sample(50.0, 10.0);
        assert!(!drag.is_tracking());
        assert_eq!(drag.offset_x(), 0.0);
    }

    #[test]
    fn drag_swallows_exactly_one_click() {
        let mut session = PointerSession::default();
        session.press(0, 100.0, 0.0);
        let motion = session.motion(60.0, 16.0).unwrap();
        assert_eq!(motion.started, Some(0));
        assert_eq!(session.motion(50.0, 32.0).unwrap().started, None);
        assert!(session.finish(50.0, 40.0).is_some());
        assert!(session.take_swallowed_click());
        assert!(!session.take_swallowed_click());
    }

    #[test]
    fn drag_ended_by_leave_does_not_eat_next_click() {
        let mut session = PointerSession::default();
        session.press(0, 100.0, 0.0);
        session.motion(30.0, 16.0);
        // Pointer left the card: no click follows this release.
        assert!(session.finish(30.0, 24.0).is_some());

        session.press(0, 100.0, 500.0);
        assert!(session.finish(100.0, 520.0).is_none());
        assert!(!session.take_swallowed_click());
    }

    #[test]
    fn jitter_below_start_distance_stays_a_click() {
        let mut session = PointerSession::default();
        session.press(2, 100.0, 0.0);
        assert!(session.motion(101.5, 16.0).is_none());
        assert!(session.finish(101.5, 30.0).is_none());
        assert!(!session.take_swallowed_click());
    }

    #[test]
    fn leave_after_up_keeps_the_pending_swallow() {
        let mut session = PointerSession::default();
        session.press(0, 100.0, 0.0);
        session.motion(20.0, 16.0);
        assert!(session.finish(20.0, 20.0).is_some());
        assert!(session.finish(20.0, 22.0).is_none());
        assert!(session.take_swallowed_click());
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut session = PointerSession::default();
        assert!(session.motion(500.0, 10.0).is_none());
        assert!(session.finish(500.0, 20.0).is_none());
    }
}
