use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose widget snapshots while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Case study carousel auto-advance period.
pub const CAROUSEL_INTERVAL_MS: u32 = 10_000;

/// Wait before scrolling to an anchor after switching back to the home page,
/// so the home sections are mounted first.
pub const SCROLL_SETTLE_MS: u32 = 100;

pub const SWIPE_DISTANCE_THRESHOLD: f64 = 50.0;
pub const SWIPE_POWER_THRESHOLD: f64 = 1000.0;

/// Scroll offset after which the nav bar switches to its compact style.
pub const NAV_SCROLLED_OFFSET: f64 = 20.0;

pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Client logo marquee speed, in percent of one strip per second.
pub const MARQUEE_BASE_VELOCITY: f64 = 1.5;

/// Pointer travel before a press on the top card turns into a drag.
pub const DRAG_START_DISTANCE: f64 = 3.0;

/// Release velocity is measured over the pointer samples from this last stretch of the drag.
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Marquee animation step.
pub const MARQUEE_FRAME_MS: u32 = 33;
