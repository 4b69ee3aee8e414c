//! Card collection that morphs between a swipeable stack, a grid and a list.
//!
//! In the stack only the top card can be dragged. A release is classified by
//! distance and by "swipe power" (`|offset| * velocity`), either one is enough:
//!
//! ```text
//!   offset < -50  or power < -1000   -> next card
//!   offset >  50  or power >  1000   -> previous card
//!   otherwise                        -> snap back
//! ```

use log::debug;
use serde::Serialize;

use super::error::StateError;
use crate::config::{SWIPE_DISTANCE_THRESHOLD, SWIPE_POWER_THRESHOLD};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Stack,
    Grid,
    List,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Stack, LayoutMode::Grid, LayoutMode::List];

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Stack => "stack",
            LayoutMode::Grid => "grid",
            LayoutMode::List => "list",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub date: Option<String>,
    pub author: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SwipeOutcome {
    Advance,
    Retreat,
    SnapBack,
}

pub fn swipe_power(offset_x: f64, velocity_x: f64) -> f64 {
    offset_x.abs() * velocity_x
}

pub fn classify_swipe(offset_x: f64, velocity_x: f64) -> SwipeOutcome {
    let power = swipe_power(offset_x, velocity_x);
    if offset_x < -SWIPE_DISTANCE_THRESHOLD || power < -SWIPE_POWER_THRESHOLD {
        SwipeOutcome::Advance
    } else if offset_x > SWIPE_DISTANCE_THRESHOLD || power > SWIPE_POWER_THRESHOLD {
        SwipeOutcome::Retreat
    } else {
        SwipeOutcome::SnapBack
    }
}

/// Where a card sits on screen. Only the stack layout offsets cards; bigger
/// positions are shifted further down-right and rotated more.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardVisual {
    pub top: f64,
    pub left: f64,
    pub z_index: usize,
    pub rotate: f64,
}

impl CardVisual {
    const FLAT: CardVisual = CardVisual {
        top: 0.0,
        left: 0.0,
        z_index: 1,
        rotate: 0.0,
    };
}

/// One entry of the paint order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacedCard {
    pub index: usize,
    pub position: usize,
    pub visual: CardVisual,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardStackSnapshot {
    pub layout: LayoutMode,
    pub active_index: usize,
    pub expanded_card_id: Option<String>,
    pub is_dragging: bool,
    /// Paint order, topmost last.
    pub cards: Vec<PlacedCard>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardStack {
    cards: Vec<Card>,
    layout: LayoutMode,
    active_index: usize,
    expanded_card_id: Option<String>,
    is_dragging: bool,
}

impl CardStack {
    pub fn new(cards: Vec<Card>, layout: LayoutMode) -> Result<Self, StateError> {
        if cards.is_empty() {
            return Err(StateError::EmptyCollection { widget: "card stack" });
        }
        Ok(Self {
            cards,
            layout,
            active_index: 0,
            expanded_card_id: None,
            is_dragging: false,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn expanded_card_id(&self) -> Option<&str> {
        self.expanded_card_id.as_deref()
    }

    pub fn is_expanded(&self, card_id: &str) -> bool {
        self.expanded_card_id() == Some(card_id)
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Switching layout always collapses the expanded card.
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
        self.expanded_card_id = None;
    }

    /// Tap on a card. Ignored mid-drag and for ids that aren't in the stack.
    /// Returns whether the tap counted.
    pub fn toggle_expand(&mut self, card_id: &str) -> bool {
        if self.is_dragging {
            debug!("Ignoring tap on card {} during drag", card_id);
            return false;
        }
        if !self.cards.iter().any(|c| c.id == card_id) {
            return false;
        }
        self.expanded_card_id = if self.is_expanded(card_id) {
            None
        } else {
            Some(card_id.to_string())
        };
        true
    }

    /// Cyclic distance of `index` from the active card.
    pub fn stack_position(&self, index: usize) -> usize {
        let n = self.len();
        (index % n + n - self.active_index) % n
    }

    pub fn is_top_card(&self, index: usize) -> bool {
        self.layout == LayoutMode::Stack && index < self.len() && self.stack_position(index) == 0
    }

    pub fn on_drag_start(&mut self, index: usize) -> bool {
        if !self.is_top_card(index) {
            return false;
        }
        self.is_dragging = true;
        true
    }

    /// `None` when no drag was in progress.
    pub fn on_drag_end(&mut self, offset_x: f64, velocity_x: f64) -> Option<SwipeOutcome> {
        if !self.is_dragging {
            return None;
        }
        let outcome = classify_swipe(offset_x, velocity_x);
        let n = self.len();
        match outcome {
            SwipeOutcome::Advance => self.active_index = (self.active_index + 1) % n,
            SwipeOutcome::Retreat => self.active_index = (self.active_index + n - 1) % n,
            SwipeOutcome::SnapBack => {}
        }
        self.is_dragging = false;
        Some(outcome)
    }

    /// Dot indicator under the stack.
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

    /// Drops a half-finished gesture when the widget goes away.
    pub fn reset_gesture(&mut self) {
        self.is_dragging = false;
    }

    pub fn visual(&self, position: usize) -> CardVisual {
        match self.layout {
            LayoutMode::Stack => {
                let p = position as f64;
                CardVisual {
                    top: p * 8.0,
                    left: p * 8.0,
                    z_index: self.len() - position.min(self.len()),
                    rotate: (p - 1.0) * 2.0,
                }
            }
            LayoutMode::Grid | LayoutMode::List => CardVisual::FLAT,
        }
    }

    /// Cards in paint order. The stack paints from the deepest card up so the
    /// active card lands on top; grid and list keep the natural order.
    pub fn display_order(&self) -> Vec<PlacedCard> {
        let n = self.len();
        match self.layout {
            LayoutMode::Stack => (0..n)
                .rev()
                .map(|position| {
                    let index = (self.active_index + position) % n;
                    PlacedCard {
                        index,
                        position,
                        visual: self.visual(position),
                    }
                })
                .collect(),
            LayoutMode::Grid | LayoutMode::List => (0..n)
                .map(|index| PlacedCard {
                    index,
                    position: index,
                    visual: self.visual(index),
                })
                .collect(),
        }
    }

    pub fn snapshot(&self) -> CardStackSnapshot {
        CardStackSnapshot {
            layout: self.layout,
            active_index: self.active_index,
            expanded_card_id: self.expanded_card_id.clone(),
            is_dragging: self.is_dragging,
            cards: self.display_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                id: (i + 1).to_string(),
                title: format!("Card {}", i + 1),
                description: String::new(),
                color: "#00E5FF".to_string(),
                date: None,
                author: None,
            })
            .collect()
    }

    fn stack(n: usize) -> CardStack {
        CardStack::new(cards(n), LayoutMode::Stack).unwrap()
    }

    fn swipe(s: &mut CardStack, offset_x: f64, velocity_x: f64) -> Option<SwipeOutcome> {
        let top = s.active_index();
        assert!(s.on_drag_start(top));
        s.on_drag_end(offset_x, velocity_x)
    }

    #[test]
    fn empty_stack_is_a_configuration_error() {
        assert!(matches!(
            CardStack::new(Vec::new(), LayoutMode::Grid),
            Err(StateError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn long_slow_swipe_left_advances() {
        let mut s = stack(6);
        assert_eq!(swipe(&mut s, -60.0, 0.0), Some(SwipeOutcome::Advance));
        assert_eq!(s.active_index(), 1);
        assert!(!s.is_dragging());
    }

    #[test]
    fn short_fast_flick_counts_by_power() {
        assert_eq!(swipe_power(10.0, 150.0), 1500.0);

        // Under the distance threshold either way, power alone decides.
        let mut s = stack(6);
        assert_eq!(swipe(&mut s, -10.0, -150.0), Some(SwipeOutcome::Advance));
        assert_eq!(s.active_index(), 1);
        assert_eq!(swipe(&mut s, 10.0, 150.0), Some(SwipeOutcome::Retreat));
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn weak_gesture_snaps_back() {
        let mut s = stack(6);
        s.jump_to(2).unwrap();
        assert_eq!(swipe(&mut s, 20.0, 1.0), Some(SwipeOutcome::SnapBack));
        assert_eq!(s.active_index(), 2);
    }

    #[test]
    fn swipe_right_from_first_wraps_to_last() {
        let mut s = stack(6);
        assert_eq!(swipe(&mut s, 80.0, 0.0), Some(SwipeOutcome::Retreat));
        assert_eq!(s.active_index(), 5);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify_swipe(-50.0, 0.0), SwipeOutcome::SnapBack);
        assert_eq!(classify_swipe(50.0, 0.0), SwipeOutcome::SnapBack);
        assert_eq!(classify_swipe(-40.0, -25.0), SwipeOutcome::SnapBack);
        assert_eq!(classify_swipe(-40.0, -25.1), SwipeOutcome::Advance);
    }

    #[test]
    fn only_the_top_card_in_stack_layout_can_drag() {
        let mut s = stack(4);
        s.jump_to(2).unwrap();
        assert!(!s.on_drag_start(0));
        assert!(!s.on_drag_start(9));
        assert!(!s.is_dragging());

        s.set_layout(LayoutMode::Grid);
        assert!(!s.on_drag_start(2));

        s.set_layout(LayoutMode::Stack);
        assert!(s.on_drag_start(2));
    }

    #[test]
    fn drag_end_without_drag_is_ignored() {
        let mut s = stack(4);
        assert_eq!(s.on_drag_end(-300.0, -900.0), None);
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn taps_during_drag_are_suppressed() {
        let mut s = stack(3);
        s.on_drag_start(0);
        assert!(!s.toggle_expand("1"));
        assert_eq!(s.expanded_card_id(), None);
        s.on_drag_end(0.0, 0.0);
        assert!(s.toggle_expand("1"));
        assert_eq!(s.expanded_card_id(), Some("1"));
    }

    #[test]
    fn toggle_expand_switches_and_collapses() {
        let mut s = CardStack::new(cards(3), LayoutMode::Grid).unwrap();
        s.toggle_expand("2");
        s.toggle_expand("3");
        assert_eq!(s.expanded_card_id(), Some("3"));
        s.toggle_expand("3");
        assert_eq!(s.expanded_card_id(), None);
    }

    #[test]
    fn unknown_card_id_is_a_no_op() {
        let mut s = stack(3);
        s.toggle_expand("1");
        assert!(!s.toggle_expand("missing"));
        assert_eq!(s.expanded_card_id(), Some("1"));
    }

    #[test]
    fn layout_switch_collapses_expanded_card() {
        let mut s = stack(3);
        s.toggle_expand("2");
        s.set_layout(LayoutMode::Grid);
        assert_eq!(s.expanded_card_id(), None);
        assert_eq!(s.layout(), LayoutMode::Grid);
    }

    #[test]
    fn reset_gesture_clears_drag() {
        let mut s = stack(3);
        s.on_drag_start(0);
        s.reset_gesture();
        assert!(!s.is_dragging());
    }

    #[test]
    fn stack_paints_active_card_last_with_growing_offsets() {
        let mut s = stack(4);
        s.jump_to(1).unwrap();
        let order = s.display_order();

        let indices: Vec<_> = order.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 3, 2, 1]);

        let top = order.last().unwrap();
        assert_eq!(top.position, 0);
        assert_eq!(top.visual, CardVisual { top: 0.0, left: 0.0, z_index: 4, rotate: -2.0 });
        assert_eq!(order[0].visual, CardVisual { top: 24.0, left: 24.0, z_index: 1, rotate: 4.0 });
    }

    #[test]
    fn grid_and_list_keep_natural_order_and_flat_visuals() {
        let mut s = CardStack::new(cards(3), LayoutMode::List).unwrap();
        s.jump_to(2).unwrap();
        let order = s.display_order();
        assert_eq!(order.iter().map(|c| c.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(order.iter().all(|c| c.visual == CardVisual::FLAT));
    }

    #[test]
    fn snapshot_serializes_layout_in_lowercase() {
        let s = CardStack::new(cards(2), LayoutMode::Grid).unwrap();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["layout"], "grid");
        assert_eq!(json["cards"].as_array().map(Vec::len), Some(2));
    }

    proptest! {
        #[test]
        fn stack_positions_are_a_permutation(n in 1usize..12, active in 0usize..12) {
            let mut s = stack(n);
            s.jump_to(active % n).unwrap();
            let mut positions: Vec<_> = (0..n).map(|i| s.stack_position(i)).collect();
            prop_assert_eq!(s.stack_position(active % n), 0);
            positions.sort_unstable();
            prop_assert_eq!(positions, (0..n).collect::<Vec<_>>());
        }

        #[test]
        fn deeper_cards_shift_further(n in 2usize..12) {
            let s = stack(n);
            for p in 1..n {
                let (a, b) = (s.visual(p - 1), s.visual(p));
                prop_assert!(b.top > a.top && b.rotate > a.rotate && b.z_index < a.z_index);
            }
        }
    }
}
