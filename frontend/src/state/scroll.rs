//! Page switch + anchor scroll choreography used by the nav bar and the
//! call-to-action buttons. The navigation store knows nothing about scrolling;
//! callers build a [`NavPlan`] and carry it out against the store and the DOM.

use serde::Serialize;

use super::navigation::Page;
use crate::config::SCROLL_SETTLE_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScrollTiming {
    Immediate,
    /// Wait this long so the target section has been rendered.
    AfterRender(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScrollTarget {
    pub anchor: String,
    pub timing: ScrollTiming,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavPlan {
    pub switch_to: Option<Page>,
    pub scroll: Option<ScrollTarget>,
}

/// A section link in the nav bar. Away from home we go back home first and
/// scroll once the home sections exist; on home we just scroll.
pub fn section_link(current: Page, anchor: Option<&str>) -> NavPlan {
    let away = current != Page::Home;
    NavPlan {
        switch_to: away.then_some(Page::Home),
        scroll: anchor.filter(|a| !a.is_empty()).map(|anchor| ScrollTarget {
            anchor: anchor.to_string(),
            timing: if away {
                ScrollTiming::AfterRender(SCROLL_SETTLE_MS)
            } else {
                ScrollTiming::Immediate
            },
        }),
    }
}

/// "Book Strategy" style buttons always scroll after the settle delay.
pub fn call_to_action(current: Page, anchor: &str) -> NavPlan {
    NavPlan {
        switch_to: (current != Page::Home).then_some(Page::Home),
        scroll: Some(ScrollTarget {
            anchor: anchor.to_string(),
            timing: ScrollTiming::AfterRender(SCROLL_SETTLE_MS),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_link_from_detail_page_goes_home_then_waits() {
        let plan = section_link(Page::Insights, Some("approach"));
        assert_eq!(plan.switch_to, Some(Page::Home));
        assert_eq!(
            plan.scroll,
            Some(ScrollTarget {
                anchor: "approach".to_string(),
                timing: ScrollTiming::AfterRender(SCROLL_SETTLE_MS),
            })
        );
    }

    #[test]
    fn section_link_on_home_scrolls_right_away() {
        let plan = section_link(Page::Home, Some("solutions"));
        assert_eq!(plan.switch_to, None);
        assert_eq!(plan.scroll.map(|s| s.timing), Some(ScrollTiming::Immediate));
    }

    #[test]
    fn section_link_without_anchor_only_switches() {
        assert_eq!(section_link(Page::Home, None), NavPlan::default());
        let plan = section_link(Page::Approach, Some(""));
        assert_eq!(plan.switch_to, Some(Page::Home));
        assert!(plan.scroll.is_none());
    }

    #[test]
    fn call_to_action_always_delays() {
        let on_home = call_to_action(Page::Home, "contact");
        assert_eq!(on_home.switch_to, None);
        assert_eq!(
            on_home.scroll.map(|s| s.timing),
            Some(ScrollTiming::AfterRender(SCROLL_SETTLE_MS))
        );
        assert_eq!(call_to_action(Page::Solutions, "contact").switch_to, Some(Page::Home));
    }
}
