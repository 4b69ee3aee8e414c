use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::state::scroll::{NavPlan, ScrollTiming};
use crate::state::{NavigationState, Page};

impl Reducible for NavigationState {
    type Action = Page;

    fn reduce(self: Rc<Self>, page: Page) -> Rc<Self> {
        if self.current() == page {
            return self;
        }
        let mut next = (*self).clone();
        next.navigate_to(page);
        next.into()
    }
}

/// Shared handle to the navigation store. Created once by
/// [`NavigationProvider`] and read by the nav bar and the page root.
pub type NavigationContext = UseReducerHandle<NavigationState>;

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

fn location_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let navigation = use_reducer(|| NavigationState::from_fragment(&location_fragment()));

    html! {
        <ContextProvider<NavigationContext> context={navigation}>
            { for props.children.iter() }
        </ContextProvider<NavigationContext>>
    }
}

#[hook]
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationProvider missing above this component")
}

pub fn scroll_to_anchor(anchor: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", anchor),
    }
}

/// Switches page (if the plan says so) and then scrolls, waiting for the
/// next render when the target section isn't mounted yet.
pub fn carry_out(plan: NavPlan, navigation: &NavigationContext) {
    if let Some(page) = plan.switch_to {
        navigation.dispatch(page);
    }
    if let Some(target) = plan.scroll {
        match target.timing {
            ScrollTiming::Immediate => scroll_to_anchor(&target.anchor),
            ScrollTiming::AfterRender(delay) => {
                let timeout = Timeout::new(delay, move || scroll_to_anchor(&target.anchor));
                timeout.forget();
            }
        }
    }
}

/// Click handler that just switches page, for "View details" style buttons.
pub fn go_to(navigation: &NavigationContext, page: Page) -> Callback<MouseEvent> {
    let navigation = navigation.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigation.dispatch(page);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
