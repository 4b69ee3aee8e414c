//! Shared chrome for the detail pages.

use yew::prelude::*;

use crate::components::navigation::{go_to, scroll_to_anchor, use_navigation};
use crate::content::CONTACT_ANCHOR;
use crate::state::Page;

#[derive(Properties, PartialEq)]
pub struct DetailHeaderProps {
    pub lead: AttrValue,
    pub accent: AttrValue,
    #[prop_or_default]
    pub trail: AttrValue,
    pub intro: AttrValue,
}

#[function_component(DetailHeader)]
pub fn detail_header(props: &DetailHeaderProps) -> Html {
    let navigation = use_navigation();

    html! {
        <div class="detail-header">
            <button class="back-home" onclick={go_to(&navigation, Page::Home)}>
                {"← Back to Home"}
            </button>
            <h1>
                {props.lead.clone()}
                <span class="accent">{props.accent.clone()}</span>
                {props.trail.clone()}
            </h1>
            <p>{props.intro.clone()}</p>
            <style>
                {r#"
                .detail-page {
                    position: relative;
                    min-height: 100vh;
                    padding: 128px 24px 96px;
                    background: linear-gradient(to bottom, #0B1B33 0, #050B14 500px);
                }
                .detail-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .detail-header {
                    margin-bottom: 48px;
                }
                .back-home {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                    font-size: 16px;
                    padding: 0;
                    margin-bottom: 32px;
                }
                .back-home:hover {
                    color: #fff;
                }
                .detail-header h1 {
                    font-size: 60px;
                    margin: 0 0 24px;
                }
                .detail-header .accent {
                    color: #00E5FF;
                }
                .detail-header p {
                    color: #d1d5db;
                    font-size: 20px;
                    line-height: 1.6;
                    max-width: 768px;
                }
                @media (max-width: 768px) {
                    .detail-header h1 {
                        font-size: 36px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

/// The contact section is mounted on every page, so no page switch is needed.
pub fn to_contact() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(CONTACT_ANCHOR);
    })
}
