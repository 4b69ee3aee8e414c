use serde::Serialize;

/// Single-open disclosure state over a fixed list of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccordionState {
    len: usize,
    open_index: Option<usize>,
}

impl AccordionState {
    /// `initially_open` past the end is dropped so the open index is always valid.
    pub fn new(len: usize, initially_open: Option<usize>) -> Self {
        Self {
            len,
            open_index: initially_open.filter(|&i| i < len),
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    /// Clicking the open header closes it, any other header opens in its place.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open_index = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_entry_open_by_default_on_the_site() {
        let faq = AccordionState::new(5, Some(0));
        assert!(faq.is_open(0));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn toggling_another_entry_closes_the_first() {
        let mut faq = AccordionState::new(5, Some(0));
        faq.toggle(3);
        assert_eq!(faq.open_index(), Some(3));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let mut faq = AccordionState::new(5, Some(2));
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut faq = AccordionState::new(2, Some(7));
        assert_eq!(faq.open_index(), None);
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);
    }

    proptest! {
        #[test]
        fn toggle_twice_restores(i in 0usize..8, starts_open in any::<bool>()) {
            let mut faq = AccordionState::new(8, starts_open.then_some(i));
            let before = faq.clone();
            faq.toggle(i);
            faq.toggle(i);
            prop_assert_eq!(faq, before);
        }

        #[test]
        fn last_toggled_distinct_entry_wins(i in 0usize..8, j in 0usize..8) {
            prop_assume!(i != j);
            let mut faq = AccordionState::new(8, None);
            faq.toggle(i);
            faq.toggle(j);
            prop_assert_eq!(faq.open_index(), Some(j));
        }
    }
}
