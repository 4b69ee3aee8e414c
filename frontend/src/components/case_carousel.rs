use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, error, warn};
use yew::prelude::*;

use crate::components::navigation::{go_to, use_navigation};
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::{CaseStudy, CASE_STUDIES};
use crate::state::{Carousel, Page, ScopedResource};

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
    Tick,
}

impl<T: Clone> Reducible for Carousel<T> {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::Tick => next.tick(),
            CarouselAction::JumpTo(index) => {
                if let Err(e) = next.jump_to(index) {
                    warn!("Carousel jump rejected: {}", e);
                    return self;
                }
            }
        }
        if let Ok(json) = serde_json::to_string(&next.snapshot()) {
            debug!("Carousel: {}", json);
        }
        next.into()
    }
}

/// "Featured Case Studies" section on the home page.
#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    match Carousel::new(CASE_STUDIES.iter().collect()) {
        Ok(carousel) => html! { <CaseCarousel initial={carousel} /> },
        Err(e) => {
            error!("Case studies not rendered: {}", e);
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseCarouselProps {
    pub initial: Carousel<&'static CaseStudy>,
}

#[function_component(CaseCarousel)]
pub fn case_carousel(props: &CaseCarouselProps) -> Html {
    let carousel = use_reducer(|| props.initial.clone());
    let navigation = use_navigation();

    // Auto-advance for as long as the section is mounted. Manual moves don't
    // restart the period.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let mut timer = ScopedResource::active(Interval::new(CAROUSEL_INTERVAL_MS, move || {
                    carousel.dispatch(CarouselAction::Tick);
                }));
                move || {
                    if timer.stop() {
                        debug!("Case study auto-advance stopped");
                    }
                }
            },
            (),
        );
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };

    let study = *carousel.current();
    let active = carousel.active_index();

    html! {
        <section class="case-carousel" id="case-studies">
            <div class="carousel-header">
                <div>
                    <span class="eyebrow">{"Success Stories"}</span>
                    <h2>{"Featured Case Studies"}</h2>
                </div>
                <div class="carousel-arrows">
                    <button aria-label="Previous case study" onclick={dispatch(|| CarouselAction::Previous)}>{"←"}</button>
                    <button aria-label="Next case study" onclick={dispatch(|| CarouselAction::Next)}>{"→"}</button>
                </div>
            </div>

            <div class="carousel-slide" key={study.id}>
                <div class="slide-text">
                    <div class="client-chip">{study.client}</div>
                    <h3>{study.title}</h3>
                    <p>{study.desc}</p>
                    <div class="slide-stats">
                        { for study.stats.iter().map(|(label, value)| html! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                    <div class="slide-actions">
                        <button class="outline-button" onclick={go_to(&navigation, Page::CaseStudies)}>{"View Details →"}</button>
                        <button class="ghost-button" onclick={go_to(&navigation, Page::CaseStudies)}>{"See All Projects"}</button>
                    </div>
                </div>
                <div class="slide-visual">
                    <img src={study.image} alt={study.title} loading="lazy" decoding="async" />
                </div>
            </div>

            <div class="carousel-dots">
                { for (0..carousel.len()).map(|index| {
                    let carousel = carousel.clone();
                    let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)));
                    html! {
                        <button
                            class={classes!("dot", (index == active).then(|| "active"))}
                            aria-label={format!("Go to case study {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .case-carousel {
                    padding: 96px 24px;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .carousel-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 48px;
                }
                .eyebrow {
                    color: #00E5FF;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    font-size: 14px;
                    text-transform: uppercase;
                }
                .carousel-arrows button {
                    width: 48px;
                    height: 48px;
                    margin-left: 8px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: none;
                    color: #fff;
                    cursor: pointer;
                }
                .carousel-slide {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 48px;
                    align-items: center;
                    min-height: 550px;
                    animation: slideIn 0.5s ease;
                }
                @keyframes slideIn {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .client-chip {
                    display: inline-block;
                    padding: 4px 12px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 12px;
                    margin-bottom: 24px;
                }
                .slide-text h3 {
                    font-size: 44px;
                    line-height: 1.15;
                    margin-bottom: 24px;
                }
                .slide-text p {
                    color: #9ca3af;
                    font-size: 18px;
                    line-height: 1.7;
                    max-width: 512px;
                }
                .slide-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 24px;
                    max-width: 384px;
                    margin: 32px 0;
                }
                .stat {
                    padding: 16px;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .stat-value {
                    font-size: 24px;
                    font-weight: 700;
                }
                .stat-label {
                    font-size: 14px;
                    color: #9ca3af;
                }
                .slide-actions {
                    display: flex;
                    gap: 16px;
                }
                .ghost-button {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    cursor: pointer;
                }
                .slide-visual img {
                    width: 100%;
                    height: 100%;
                    min-height: 300px;
                    object-fit: cover;
                    border-radius: 16px;
                    filter: grayscale(1);
                    transition: filter 0.7s ease;
                }
                .slide-visual img:hover {
                    filter: none;
                }
                .carousel-dots {
                    display: flex;
                    gap: 8px;
                    margin-top: 32px;
                }
                .dot {
                    height: 4px;
                    width: 16px;
                    border-radius: 9999px;
                    border: none;
                    background: #374151;
                    transition: all 0.3s ease;
                    cursor: pointer;
                }
                .dot.active {
                    width: 48px;
                    background: #00E5FF;
                }
                @media (max-width: 1024px) {
                    .carousel-slide {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
