use log::info;
use yew::prelude::*;

mod components;
mod config;
mod content;
mod state;
mod pages {
    pub mod approach;
    pub mod case_studies;
    pub mod home;
    pub mod insights;
    pub mod solutions;
}

use components::contact::Contact;
use components::navbar::Navbar;
use components::navigation::{use_navigation, NavigationProvider};
use components::sections::Footer;
use pages::{
    approach::ApproachPage,
    case_studies::CaseStudiesPage,
    home::Home,
    insights::InsightsPage,
    solutions::SolutionsPage,
};
use state::Page;

fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::Solutions => {
            info!("Rendering Solutions page");
            html! { <SolutionsPage /> }
        }
        Page::Approach => {
            info!("Rendering Approach page");
            html! { <ApproachPage /> }
        }
        Page::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudiesPage /> }
        }
        Page::Insights => {
            info!("Rendering Insights page");
            html! { <InsightsPage /> }
        }
    }
}

#[function_component(MainContent)]
fn main_content() -> Html {
    let navigation = use_navigation();

    // Contact and footer close every page, detail pages included.
    html! {
        <>
            <Navbar />
            { switch(navigation.current()) }
            <Contact />
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NavigationProvider>
            <main class="site">
                <MainContent />
            </main>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #050B14;
                    color: #fff;
                    font-family: 'Inter', system-ui, sans-serif;
                }
                .site {
                    min-height: 100vh;
                }
                ::selection {
                    background: #00E5FF;
                    color: #050B14;
                }
                "#}
            </style>
        </NavigationProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
