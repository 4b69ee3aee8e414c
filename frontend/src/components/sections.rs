use chrono::{Datelike, Local};
use log::error;
use yew::prelude::*;

use crate::components::card_stack::MorphingCardStack;
use crate::components::navigation::{carry_out, go_to, use_navigation, NavigationContext};
use crate::content::{insight_cards, CONTACT_ANCHOR, PROCESS_STEPS, SERVICES};
use crate::state::scroll::section_link;
use crate::state::{Card, CardStack, LayoutMode, Page};

fn scroll_button(navigation: &NavigationContext, anchor: &'static str) -> Callback<MouseEvent> {
    let navigation = navigation.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        carry_out(section_link(navigation.current(), Some(anchor)), &navigation);
    })
}

const TRAFFIC_BARS: [u32; 15] = [40, 60, 45, 70, 50, 80, 65, 90, 75, 55, 85, 95, 60, 75, 80];

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigation = use_navigation();

    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    {"Trusted by Global Enterprises"}
                </div>
                <h1>{"Future-Proof Your Business"}</h1>
                <h1 class="dimmed">{"with Intelligent Innovation."}</h1>
                <p class="hero-subtitle">
                    {"From AI-driven automation to seamless application development, we craft the technology that scales your brand to new heights."}
                </p>
                <div class="hero-actions">
                    <button class="primary-button" onclick={scroll_button(&navigation, "solutions")}>
                        {"Discover Our Solutions"}
                    </button>
                    <button class="outline-button" onclick={scroll_button(&navigation, "case-studies")}>
                        {"View Case Studies"}
                    </button>
                </div>
            </div>
            <div class="hero-dashboard">
                <div class="dashboard-header">
                    <div class="window-dots">
                        <span class="red"></span><span class="yellow"></span><span class="green"></span>
                    </div>
                    <div class="dashboard-stats">{"CPU: 12%  MEM: 4.2GB  NET: 1.2GB/s"}</div>
                </div>
                <div class="dashboard-body">
                    <h3>{"Ecosystem Traffic"}</h3>
                    <p>{"Real-time node activity"}</p>
                    <div class="traffic-bars">
                        { for TRAFFIC_BARS.iter().enumerate().map(|(i, height)| html! {
                            <div
                                class="traffic-bar"
                                style={format!("height: {}%; animation-delay: {}ms;", height, i * 50)}
                            />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 75vh;
                    padding: 144px 24px 64px;
                    text-align: center;
                    overflow: hidden;
                    background: radial-gradient(ellipse at top, #0B1B33 0%, #050B14 70%);
                }
                .hero-content {
                    max-width: 896px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .hero-badge {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    padding: 8px 16px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 12px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 24px;
                }
                .pulse-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #00E5FF;
                    box-shadow: 0 0 10px #00E5FF;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.4; }
                }
                .hero h1 {
                    font-size: 60px;
                    line-height: 1.15;
                    margin: 0 0 8px;
                }
                .hero h1.dimmed {
                    color: rgba(255, 255, 255, 0.4);
                }
                .hero-subtitle {
                    color: #d1d5db;
                    font-size: 18px;
                    max-width: 672px;
                    margin: 16px auto 32px;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    gap: 16px;
                    justify-content: center;
                }
                .primary-button {
                    background: #00E5FF;
                    color: #050B14;
                    border: none;
                    border-radius: 9999px;
                    padding: 14px 32px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-dashboard {
                    max-width: 1024px;
                    margin: 40px auto 0;
                    border-radius: 32px 32px 0 0;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: none;
                    background: rgba(255, 255, 255, 0.04);
                    overflow: hidden;
                    text-align: left;
                }
                .dashboard-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 40px;
                    padding: 0 24px;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .window-dots span {
                    display: inline-block;
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    margin-right: 8px;
                }
                .window-dots .red { background: #ef4444; }
                .window-dots .yellow { background: #f59e0b; }
                .window-dots .green { background: #22c55e; }
                .dashboard-stats {
                    font-family: monospace;
                    font-size: 10px;
                    color: #9ca3af;
                    white-space: pre;
                }
                .dashboard-body {
                    padding: 24px;
                }
                .dashboard-body p {
                    font-size: 12px;
                    color: #9ca3af;
                }
                .traffic-bars {
                    display: flex;
                    align-items: flex-end;
                    gap: 8px;
                    height: 128px;
                }
                .traffic-bar {
                    flex: 1;
                    border-radius: 4px 4px 0 0;
                    background: linear-gradient(to top, rgba(0, 229, 255, 0.2), #00E5FF);
                    animation: breathe 3s ease-in-out infinite;
                }
                @keyframes breathe {
                    50% { opacity: 0.7; transform: scaleY(0.85); }
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 32px;
                    }
                    .hero-actions {
                        flex-direction: column;
                    }
                    .dashboard-stats {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// The five-step process grid, anchored as "approach".
#[function_component(Ecosystem)]
pub fn ecosystem() -> Html {
    let navigation = use_navigation();

    html! {
        <section class="ecosystem" id="approach">
            <div class="ecosystem-header">
                <h2>{"The GoPhygital "}<span class="muted">{"Methodology."}</span></h2>
                <div>
                    <p>{"We don't just build software; we engineer digital transformations through a proven, data-driven 5-step process."}</p>
                    <button class="outline-button" onclick={go_to(&navigation, Page::Approach)}>
                        {"Deep Dive into Our Process →"}
                    </button>
                </div>
            </div>
            <div class="process-grid">
                { for PROCESS_STEPS.iter().map(|step| html! {
                    <div class="process-card" onclick={go_to(&navigation, Page::Approach)}>
                        <span class="step-number">{step.number}</span>
                        <h3>{step.title}</h3>
                        <p>{step.desc}</p>
                        <span class="step-more">{"View Deliverables →"}</span>
                    </div>
                }) }
                <div class="process-card start-now" onclick={scroll_button(&navigation, CONTACT_ANCHOR)}>
                    <h3>{"Start Now"}</h3>
                    <p>{"Ready to engineer your digital future?"}</p>
                </div>
            </div>
            <style>
                {r#"
                .ecosystem {
                    padding: 128px 24px;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .ecosystem-header {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 48px;
                    align-items: end;
                    margin-bottom: 80px;
                }
                .ecosystem-header h2 {
                    font-size: 56px;
                    margin: 0;
                }
                .muted {
                    color: #6b7280;
                }
                .ecosystem-header p {
                    color: #9ca3af;
                    font-size: 18px;
                    max-width: 448px;
                }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 24px;
                }
                .process-card {
                    padding: 40px;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    cursor: pointer;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .process-card:hover {
                    border-color: rgba(0, 229, 255, 0.4);
                }
                .process-card p {
                    color: #9ca3af;
                    font-size: 14px;
                    line-height: 1.6;
                }
                .step-number {
                    font-family: monospace;
                    color: #4b5563;
                    font-size: 40px;
                }
                .step-more {
                    font-size: 12px;
                    color: #00E5FF;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .process-card:hover .step-more {
                    opacity: 1;
                }
                .process-card.start-now {
                    background: #00E5FF;
                    color: #000;
                }
                .process-card.start-now p {
                    color: rgba(0, 0, 0, 0.7);
                }
                .process-card.start-now:hover {
                    transform: scale(1.02);
                }
                @media (max-width: 1024px) {
                    .process-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .ecosystem-header, .process-grid {
                        grid-template-columns: 1fr;
                    }
                    .ecosystem-header h2 {
                        font-size: 36px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let navigation = use_navigation();

    html! {
        <section class="services" id="solutions">
            <div class="services-header">
                <h2>{"Core Solutions"}</h2>
                <p>{"Discover how we engineer digital value across every touchpoint of your enterprise."}</p>
                <button class="outline-button" onclick={go_to(&navigation, Page::Solutions)}>
                    {"View Full Service Catalog →"}
                </button>
            </div>
            <div class="service-stack">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <div class="service-card" style={format!("top: calc(10vh + {}px);", i * 25)}>
                        <div class="service-text">
                            <span class="service-subtitle" style={format!("color: {};", service.color)}>
                                {service.subtitle}
                            </span>
                            <h3>{service.title}</h3>
                            <p>{service.desc}</p>
                            <button class="ghost-button" onclick={go_to(&navigation, Page::Solutions)}>
                                {"Explore →"}
                            </button>
                        </div>
                        <div
                            class="service-visual"
                            style={format!("background: radial-gradient(circle at 50% 50%, {} 0%, transparent 60%);", service.color)}
                        >
                            <span class="service-index">{format!("0{}", i + 1)}</span>
                        </div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .services {
                    padding: 96px 24px;
                }
                .services-header {
                    text-align: center;
                    margin-bottom: 64px;
                }
                .services-header h2 {
                    font-size: 56px;
                    margin-bottom: 16px;
                }
                .services-header p {
                    color: #9ca3af;
                    max-width: 576px;
                    margin: 0 auto 32px;
                }
                .service-stack {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                }
                .service-card {
                    position: sticky;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    min-height: 420px;
                    border-radius: 40px;
                    overflow: hidden;
                    background: #0A1424;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.5);
                }
                .service-text {
                    padding: 48px;
                }
                .service-subtitle {
                    font-size: 12px;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .service-text h3 {
                    font-size: 36px;
                }
                .service-text p {
                    color: #d1d5db;
                    font-size: 18px;
                    line-height: 1.6;
                    max-width: 448px;
                }
                .service-visual {
                    position: relative;
                    filter: saturate(1.2);
                }
                .service-index {
                    position: absolute;
                    bottom: 32px;
                    right: 32px;
                    font-size: 96px;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.1);
                }
                @media (max-width: 768px) {
                    .service-card {
                        grid-template-columns: 1fr;
                    }
                    .service-visual {
                        min-height: 160px;
                    }
                    .services-header h2 {
                        font-size: 36px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// Knowledge hub teaser. The card stack opens in grid layout; clicking a card
/// expands it and takes the visitor to the full insights page.
#[function_component(Insights)]
pub fn insights() -> Html {
    let navigation = use_navigation();

    let on_card_click = {
        let navigation = navigation.clone();
        Callback::from(move |_: Card| navigation.dispatch(Page::Insights))
    };

    let stack = match CardStack::new(insight_cards(), LayoutMode::Grid) {
        Ok(stack) => html! { <MorphingCardStack initial={stack} on_card_click={Some(on_card_click)} /> },
        Err(e) => {
            error!("Insights not rendered: {}", e);
            html! {}
        }
    };

    html! {
        <section class="insights" id="insights">
            <div class="insights-header">
                <div>
                    <span class="eyebrow">{"Knowledge Hub"}</span>
                    <h2>{"Insights & "}<span class="muted">{"Perspectives"}</span></h2>
                    <p>{"Explore our latest thinking on technology, design, and digital transformation. Swipe to browse or switch views."}</p>
                </div>
                <button class="ghost-button" onclick={go_to(&navigation, Page::Insights)}>
                    {"View All Articles →"}
                </button>
            </div>
            <div class="insights-stack">{stack}</div>
            <style>
                {r#"
                .insights {
                    padding: 96px 24px;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .insights-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 64px;
                }
                .insights-header h2 {
                    font-size: 48px;
                    margin: 8px 0 0;
                }
                .insights-header p {
                    color: #9ca3af;
                    max-width: 512px;
                }
                .insights-stack {
                    min-height: 400px;
                }
                @media (max-width: 768px) {
                    .insights-header {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 24px;
                    }
                    .insights-header h2 {
                        font-size: 30px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/assets/logo.svg" alt="GoPhygital" class="footer-logo" />
                    <p>{"Empowering global enterprises with unified digital ecosystems. We bridge the gap between physical operations and digital intelligence."}</p>
                </div>
                <div>
                    <h4>{"Solutions"}</h4>
                    <ul>
                        <li>{"Digital Ecosystems"}</li>
                        <li>{"Enterprise Apps"}</li>
                        <li>{"Cloud & DevOps"}</li>
                        <li>{"AR / VR Experiences"}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li>{"About Us"}</li>
                        <li>{"Case Studies"}</li>
                        <li>{"Careers"}</li>
                        <li>{"Contact"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} GoPhygital. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    <span>{"Privacy Policy"}</span>
                    <span>{"Terms of Service"}</span>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #050B14;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 64px 24px 32px;
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto 48px;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 48px;
                }
                .footer-logo {
                    height: 80px;
                    margin-bottom: 32px;
                }
                .footer-brand p {
                    color: #9ca3af;
                    max-width: 384px;
                }
                .site-footer h4 {
                    margin-bottom: 16px;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    font-size: 14px;
                    color: #9ca3af;
                    line-height: 2;
                }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding-top: 32px;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    justify-content: space-between;
                    font-size: 14px;
                    color: #6b7280;
                }
                .footer-legal {
                    display: flex;
                    gap: 24px;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        align-items: center;
                        gap: 16px;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
