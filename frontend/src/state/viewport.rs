use crate::config::{MOBILE_BREAKPOINT, NAV_SCROLLED_OFFSET};

pub fn is_mobile(window_width: f64) -> bool {
    window_width <= MOBILE_BREAKPOINT
}

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

/// How many copies of the logo strip are needed to cover the container with
/// one spare on each side. Recomputed whenever the window is resized.
pub fn marquee_repetitions(container_width: f64, strip_width: f64) -> usize {
    if strip_width <= 0.0 || !container_width.is_finite() {
        return 2;
    }
    ((container_width / strip_width).ceil() as usize + 2).max(2)
}

/// Wraps `v` into `[min, max)`, also for negative values.
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    ((v - min) % range + range) % range + min
}

/// One row of the client logo marquee. The position is kept unbounded and
/// wrapped into one strip width on read.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeState {
    base_x: f64,
    velocity: f64,
    repetitions: usize,
}

impl MarqueeState {
    /// `velocity` is in percent of one strip per second; negative runs right.
    pub fn new(velocity: f64) -> Self {
        Self {
            base_x: 0.0,
            velocity,
            repetitions: 2,
        }
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn set_repetitions(&mut self, repetitions: usize) {
        self.repetitions = repetitions.max(2);
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        self.base_x += self.velocity * elapsed_ms / 1000.0;
    }

    pub fn offset_percent(&self) -> f64 {
        wrap(-100.0 / self.repetitions as f64, 0.0, self.base_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile(768.0));
        assert!(!is_mobile(769.0));
    }

    #[test]
    fn nav_compacts_after_threshold() {
        assert!(!nav_is_scrolled(20.0));
        assert!(nav_is_scrolled(21.0));
    }

    #[test]
    fn repetitions_cover_container_plus_buffer() {
        assert_eq!(marquee_repetitions(1200.0, 500.0), 5);
        assert_eq!(marquee_repetitions(100.0, 2000.0), 3);
        assert_eq!(marquee_repetitions(0.0, 100.0), 2);
    }

    #[test]
    fn unmeasured_strip_falls_back_to_two() {
        assert_eq!(marquee_repetitions(1200.0, 0.0), 2);
    }

    #[test]
    fn wrap_handles_negative_values() {
        assert_eq!(wrap(-25.0, 0.0, -30.0), -5.0);
        assert_eq!(wrap(-25.0, 0.0, 5.0), -20.0);
        assert_eq!(wrap(-25.0, 0.0, -10.0), -10.0);
    }

    #[test]
    fn marquee_offset_stays_within_one_copy() {
        let mut row = MarqueeState::new(-1.5);
        row.set_repetitions(4);
        for _ in 0..1000 {
            row.advance(33.0);
            let x = row.offset_percent();
            assert!((-25.0..0.0).contains(&x), "offset {} escaped", x);
        }
    }

    #[test]
    fn marquee_never_drops_below_two_copies() {
        let mut row = MarqueeState::new(1.5);
        row.set_repetitions(0);
        assert_eq!(row.repetitions(), 2);
    }
}
