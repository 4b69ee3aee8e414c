use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::listeners::WindowListener;
use crate::config::{MARQUEE_BASE_VELOCITY, MARQUEE_FRAME_MS};
use crate::content::{Client, CLIENTS};
use crate::state::viewport::marquee_repetitions;
use crate::state::{MarqueeState, ScopedResource};

pub enum MarqueeAction {
    Advance(f64),
    Measure(usize),
}

impl Reducible for MarqueeState {
    type Action = MarqueeAction;

    fn reduce(self: Rc<Self>, action: MarqueeAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            MarqueeAction::Advance(elapsed_ms) => next.advance(elapsed_ms),
            MarqueeAction::Measure(repetitions) => {
                if repetitions == self.repetitions() {
                    return self;
                }
                next.set_repetitions(repetitions);
            }
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
struct ClientLogoProps {
    client: &'static Client,
}

#[function_component(ClientLogo)]
fn client_logo(props: &ClientLogoProps) -> Html {
    let failed = use_state(|| false);
    let client = props.client;

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <div class="client-logo">
            if *failed {
                <span class="client-name">{client.name}</span>
            } else {
                <img
                    src={client.logo}
                    alt={format!("{} logo", client.name)}
                    loading="lazy"
                    decoding="async"
                    {onerror}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    velocity: f64,
}

#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    let velocity = props.velocity;
    let marquee = use_reducer(move || MarqueeState::new(velocity));
    let container = use_node_ref();
    let strip = use_node_ref();

    {
        let marquee = marquee.clone();
        let container = container.clone();
        let strip = strip.clone();
        use_effect_with_deps(
            move |_| {
                let measure = {
                    let marquee = marquee.clone();
                    move || {
                        let (Some(container), Some(strip)) =
                            (container.cast::<HtmlElement>(), strip.cast::<HtmlElement>())
                        else {
                            return;
                        };
                        let repetitions = marquee_repetitions(
                            f64::from(container.offset_width()),
                            f64::from(strip.offset_width()),
                        );
                        marquee.dispatch(MarqueeAction::Measure(repetitions));
                    }
                };
                measure();

                let mut resize = ScopedResource::new();
                if let Some(listener) = WindowListener::add("resize", measure) {
                    resize.start(listener);
                }
                let mut frames = ScopedResource::active(Interval::new(MARQUEE_FRAME_MS, move || {
                    marquee.dispatch(MarqueeAction::Advance(f64::from(MARQUEE_FRAME_MS)));
                }));

                move || {
                    frames.stop();
                    resize.stop();
                    debug!("Marquee row released its timer and resize listener");
                }
            },
            (),
        );
    }

    let logos = CLIENTS
        .iter()
        .map(|client| html! { <ClientLogo {client} /> })
        .collect::<Html>();

    html! {
        <div class="marquee-row" ref={container}>
            <div
                class="marquee-track"
                style={format!("transform: translateX({:.3}%);", marquee.offset_percent())}
            >
                { for (0..marquee.repetitions()).map(|i| if i == 0 {
                    html! { <span class="marquee-strip" key={i} ref={strip.clone()}>{logos.clone()}</span> }
                } else {
                    html! { <span class="marquee-strip" key={i}>{logos.clone()}</span> }
                }) }
            </div>
        </div>
    }
}

/// "Trusted by Industry Leaders" logo strip, two rows drifting in opposite
/// directions.
#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <section class="clients-section">
            <p class="clients-title">{"Trusted by Industry Leaders"}</p>
            <div class="clients-fade left"></div>
            <div class="clients-fade right"></div>
            <div class="marquee">
                <MarqueeRow velocity={MARQUEE_BASE_VELOCITY} />
                <MarqueeRow velocity={-MARQUEE_BASE_VELOCITY} />
            </div>
            <style>
                {r#"
                .clients-section {
                    position: relative;
                    padding: 80px 0;
                    overflow: hidden;
                    background: #050B14;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .clients-title {
                    text-align: center;
                    font-size: 14px;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    text-transform: uppercase;
                    margin-bottom: 48px;
                }
                .clients-fade {
                    position: absolute;
                    top: 0;
                    z-index: 10;
                    width: 128px;
                    height: 100%;
                    pointer-events: none;
                }
                .clients-fade.left {
                    left: 0;
                    background: linear-gradient(to right, #050B14, transparent);
                }
                .clients-fade.right {
                    right: 0;
                    background: linear-gradient(to left, #050B14, transparent);
                }
                .marquee {
                    display: flex;
                    flex-direction: column;
                    gap: 48px;
                }
                .marquee-row {
                    width: 100%;
                    overflow: hidden;
                    white-space: nowrap;
                }
                .marquee-track {
                    display: inline-block;
                    will-change: transform;
                }
                .marquee-strip {
                    display: inline-flex;
                    align-items: center;
                }
                .client-logo {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 48px;
                    height: 96px;
                    width: 160px;
                }
                .client-logo img {
                    max-height: 48px;
                    width: auto;
                    object-fit: contain;
                    opacity: 0.5;
                    filter: grayscale(1) brightness(100) contrast(0);
                    transition: all 0.5s ease;
                }
                .client-logo:hover img {
                    opacity: 1;
                    filter: none;
                }
                .client-name {
                    padding: 8px 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.05);
                    font-weight: 700;
                    color: #9ca3af;
                }
                @media (max-width: 768px) {
                    .client-logo {
                        margin: 0 32px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_skips_unchanged_measurement() {
        let state = Rc::new(MarqueeState::new(MARQUEE_BASE_VELOCITY));
        let same = state.clone().reduce(MarqueeAction::Measure(state.repetitions()));
        assert!(Rc::ptr_eq(&state, &same));

        let measured = state.clone().reduce(MarqueeAction::Measure(5));
        assert_eq!(measured.repetitions(), 5);
    }

    #[test]
    fn reducer_advances_offset() {
        let state = Rc::new(MarqueeState::new(MARQUEE_BASE_VELOCITY));
        let next = state.clone().reduce(MarqueeAction::Advance(1000.0));
        assert_ne!(next.offset_percent(), state.offset_percent());
    }
}
