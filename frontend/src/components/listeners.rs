use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::state::Cancel;

/// A callback registered on `window` for one event type. Removed again when
/// cancelled, normally through a [`ScopedResource`](crate::state::ScopedResource).
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn add(event: &'static str, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("Could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Cancel for WindowListener {
    fn cancel(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Cancel for Interval {
    fn cancel(self) {
        // Dropping the returned closure is fine, the timer is already cleared.
        let _ = Interval::cancel(self);
    }
}
