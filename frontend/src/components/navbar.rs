use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::navigation::{carry_out, use_navigation};
use crate::content::{CONTACT_ANCHOR, NAV_LINKS};
use crate::state::scroll::{call_to_action, section_link};
use crate::state::viewport::nav_is_scrolled;
use crate::state::Page;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigation = use_navigation();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = nav_is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_home = {
        let navigation = navigation.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigation.dispatch(Page::Home);
        })
    };

    let book_strategy = {
        let navigation = navigation.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            carry_out(call_to_action(navigation.current(), CONTACT_ANCHOR), &navigation);
        })
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                let navigation = navigation.clone();
                let menu_open = menu_open.clone();
                let anchor = link.anchor;
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    carry_out(section_link(navigation.current(), Some(anchor)), &navigation);
                });
                html! {
                    <a class={class} href={format!("#{}", anchor)} {onclick}>{link.label}</a>
                }
            })
            .collect()
    };

    html! {
        <>
            <div class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={go_home}>
                        <img src="/assets/logo.svg" alt="GoPhygital" />
                    </a>
                    <nav class="nav-bubble">
                        { links("nav-link") }
                    </nav>
                    <div class="nav-right">
                        <button class="nav-cta" onclick={book_strategy.clone()}>
                            {"Book Strategy"}
                        </button>
                        <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                            {if *menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile-nav-link") }
                    <div class="mobile-divider"></div>
                    <button class="nav-cta wide" onclick={book_strategy}>
                        {"Book Strategy Session"}
                    </button>
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 24px;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    padding: 0 16px;
                    transition: top 0.5s ease;
                }
                .top-nav.scrolled {
                    top: 12px;
                }
                .nav-content {
                    width: 100%;
                    max-width: 1280px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 56px;
                    transition: height 0.5s ease;
                }
                .top-nav.scrolled .nav-logo img {
                    height: 36px;
                }
                .nav-bubble {
                    display: flex;
                    gap: 4px;
                    padding: 8px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(16px);
                }
                .top-nav.scrolled .nav-bubble {
                    background: rgba(5, 11, 20, 0.6);
                    border-color: rgba(255, 255, 255, 0.1);
                    padding: 4px;
                }
                .nav-link {
                    padding: 10px 24px;
                    border-radius: 9999px;
                    color: #d1d5db;
                    text-decoration: none;
                    font-size: 14px;
                }
                .nav-link:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                }
                .nav-cta {
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #00E5FF;
                    color: #050B14;
                    font-weight: 600;
                    padding: 10px 22px;
                    cursor: pointer;
                }
                .nav-cta.wide {
                    width: 100%;
                    padding: 16px;
                }
                .burger-menu {
                    display: none;
                    width: 44px;
                    height: 44px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                }
                .mobile-menu {
                    position: fixed;
                    top: 96px;
                    left: 16px;
                    right: 16px;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 24px;
                    border-radius: 24px;
                    background: rgba(5, 11, 20, 0.9);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-nav-link {
                    padding: 16px;
                    color: #e5e7eb;
                    font-size: 18px;
                    text-decoration: none;
                    border-radius: 16px;
                }
                .mobile-divider {
                    height: 1px;
                    background: rgba(255, 255, 255, 0.1);
                    margin: 16px 0;
                }
                @media (max-width: 768px) {
                    .nav-bubble, .nav-right .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </>
    }
}
