//! Handles for things a widget registers on mount (interval timers, window
//! listeners) and must release exactly once on teardown.

/// Something that can be torn down. Consumes the handle so it can't be
/// cancelled twice.
pub trait Cancel {
    fn cancel(self);
}

/// Owns at most one live handle. `stop` and `Drop` both release it, whichever
/// runs first; later calls do nothing.
#[derive(Debug)]
pub struct ScopedResource<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> Default for ScopedResource<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: Cancel> ScopedResource<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Replaces (and cancels) whatever was running before.
    pub fn start(&mut self, handle: H) {
        self.stop();
        self.handle = Some(handle);
    }

    /// Returns whether a handle was actually released.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: Cancel> Drop for ScopedResource<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHandle(Rc<Cell<u32>>);

    impl Cancel for CountingHandle {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn stop_then_drop_cancels_once() {
        let cancels = Rc::new(Cell::new(0));
        let mut timer = ScopedResource::active(CountingHandle(cancels.clone()));
        assert!(timer.is_active());

        assert!(timer.stop());
        assert!(!timer.stop());
        drop(timer);

        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn drop_alone_cancels() {
        let cancels = Rc::new(Cell::new(0));
        {
            let _timer = ScopedResource::active(CountingHandle(cancels.clone()));
        }
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn restarting_cancels_the_previous_handle() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut timer = ScopedResource::new();
        timer.start(CountingHandle(first.clone()));
        timer.start(CountingHandle(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        drop(timer);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn idle_resource_has_nothing_to_stop() {
        let mut timer: ScopedResource<CountingHandle> = ScopedResource::new();
        assert!(!timer.stop());
    }
}
