use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::error::StateError;

/// One of the sections of the site that can be shown on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Solutions,
    Approach,
    CaseStudies,
    Insights,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Solutions,
        Page::Approach,
        Page::CaseStudies,
        Page::Insights,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Solutions => "solutions",
            Page::Approach => "approach",
            Page::CaseStudies => "case-studies",
            Page::Insights => "insights",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| StateError::InvalidPage(s.to_string()))
    }
}

/// Which page is on screen. Lives for the whole session and is handed to the
/// nav bar and the page root explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    current_page: Page,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current_page
    }

    /// Any page is reachable from any page.
    pub fn navigate_to(&mut self, page: Page) {
        if self.current_page != page {
            info!("Navigating from {} to {}", self.current_page, page);
        }
        self.current_page = page;
    }

    /// String entry point (URL fragment). Unknown slugs leave the current page alone.
    pub fn navigate_to_slug(&mut self, slug: &str) -> Result<Page, StateError> {
        match slug.parse::<Page>() {
            Ok(page) => {
                self.navigate_to(page);
                Ok(page)
            }
            Err(e) => {
                warn!("Ignoring navigation request: {}", e);
                Err(e)
            }
        }
    }

    /// Initial state for a fresh session, honouring a `#page` fragment if it
    /// names one of the pages.
    pub fn from_fragment(fragment: &str) -> Self {
        let mut state = Self::new();
        let slug = fragment.trim_start_matches('#');
        if !slug.is_empty() {
            let _ = state.navigate_to_slug(slug);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(NavigationState::new().current(), Page::Home);
    }

    #[test]
    fn navigate_then_read_back_every_page() {
        let mut nav = NavigationState::new();
        for page in Page::ALL {
            nav.navigate_to(page);
            assert_eq!(nav.current(), page);
        }
    }

    #[test]
    fn unknown_slug_is_rejected_and_page_kept() {
        let mut nav = NavigationState::new();
        nav.navigate_to(Page::Approach);

        let err = nav.navigate_to_slug("pricing").unwrap_err();

        assert_eq!(err, StateError::InvalidPage("pricing".to_string()));
        assert_eq!(nav.current(), Page::Approach);
    }

    #[test]
    fn slugs_parse_back_to_their_page() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>(), Ok(page));
        }
        assert!("Case-Studies".parse::<Page>().is_err());
    }

    #[test]
    fn slug_matches_serde_name() {
        let json = serde_json::to_string(&Page::CaseStudies).unwrap();
        assert_eq!(json, "\"case-studies\"");
    }

    #[test]
    fn fragment_selects_initial_page() {
        assert_eq!(NavigationState::from_fragment("#insights").current(), Page::Insights);
        assert_eq!(NavigationState::from_fragment("").current(), Page::Home);
        assert_eq!(NavigationState::from_fragment("#contact").current(), Page::Home);
    }

    #[test]
    fn insights_and_back_home() {
        let mut nav = NavigationState::new();
        nav.navigate_to(Page::Insights);
        assert_eq!(nav.current(), Page::Insights);
        nav.navigate_to(Page::Home);
        assert_eq!(nav.current(), Page::Home);
    }
}
