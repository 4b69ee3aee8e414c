//! Rendering-free widget state. Nothing in here touches the DOM or Yew; the
//! components hold these values and render from their snapshots.

pub mod accordion;
pub mod card_stack;
pub mod carousel;
pub mod error;
pub mod gesture;
pub mod lead_form;
pub mod navigation;
pub mod scoped;
pub mod scroll;
pub mod viewport;

pub use accordion::AccordionState;
pub use card_stack::{Card, CardStack, LayoutMode, SwipeOutcome};
pub use carousel::Carousel;
pub use error::{EmailError, StateError};
pub use gesture::PointerSession;
pub use lead_form::{LeadFormState, LeadStep, SimulatedLeadSink};
pub use navigation::{NavigationState, Page};
pub use scoped::{Cancel, ScopedResource};
pub use viewport::MarqueeState;
