use serde::Serialize;

use super::error::StateError;

/// Wrapping index over a fixed, non-empty list.
///
/// The auto-advance timer lives in the view ([`ScopedResource`] around a
/// `gloo_timers` interval) and calls [`tick`](Carousel::tick). Manual moves do
/// not restart its period, so a click right before a tick advances twice.
///
/// [`ScopedResource`]: super::scoped::ScopedResource
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    active_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub active_index: usize,
    pub len: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, StateError> {
        if items.is_empty() {
            return Err(StateError::EmptyCollection { widget: "carousel" });
        }
        Ok(Self {
            items,
            active_index: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn current(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.len();
    }

    pub fn previous(&mut self) {
        self.active_index = (self.active_index + self.len() - 1) % self.len();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), StateError> {
        if index >= self.len() {
            return Err(StateError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.active_index = index;
        Ok(())
    }

    /// Timer tick, same as [`next`](Self::next).
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            active_index: self.active_index,
            len: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seven() -> Carousel<u8> {
        Carousel::new((0..7).collect()).unwrap()
    }

    #[test]
    fn empty_carousel_is_a_configuration_error() {
        assert_eq!(
            Carousel::<u8>::new(Vec::new()).unwrap_err(),
            StateError::EmptyCollection { widget: "carousel" }
        );
    }

    #[test]
    fn seven_nexts_come_back_to_start() {
        let mut c = seven();
        for _ in 0..7 {
            c.next();
        }
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = seven();
        c.previous();
        assert_eq!(c.active_index(), 6);
        assert_eq!(*c.current(), 6);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut c = seven();
        c.jump_to(3).unwrap();
        assert_eq!(
            c.jump_to(10),
            Err(StateError::IndexOutOfRange { index: 10, len: 7 })
        );
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn manual_next_then_tick_advances_twice() {
        let mut c = seven();
        c.next();
        c.tick();
        assert_eq!(c.snapshot(), CarouselSnapshot { active_index: 2, len: 7 });
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = Carousel::new(vec!["only"]).unwrap();
        c.next();
        c.previous();
        assert_eq!(c.active_index(), 0);
    }

    proptest! {
        #[test]
        fn next_then_previous_is_identity(len in 1usize..20, start in 0usize..20) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            c.jump_to(start % len).unwrap();
            let before = c.active_index();
            c.next();
            c.previous();
            prop_assert_eq!(c.active_index(), before);
        }

        #[test]
        fn index_stays_in_range(len in 1usize..20, moves in proptest::collection::vec(any::<bool>(), 0..50)) {
            let mut c = Carousel::new((0..len).collect::<Vec<_>>()).unwrap();
            for forward in moves {
                if forward { c.next() } else { c.previous() }
                prop_assert!(c.active_index() < len);
            }
        }
    }
}
