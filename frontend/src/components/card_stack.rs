use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::state::gesture::DragRelease;
use crate::state::{Card, CardStack, LayoutMode, PointerSession};

pub enum CardStackAction {
    SetLayout(LayoutMode),
    ToggleExpand(String),
    DragStart(usize),
    DragEnd(DragRelease),
    JumpTo(usize),
    ResetGesture,
}

impl Reducible for CardStack {
    type Action = CardStackAction;

    fn reduce(self: Rc<Self>, action: CardStackAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CardStackAction::SetLayout(layout) => next.set_layout(layout),
            CardStackAction::ToggleExpand(id) => {
                if !next.toggle_expand(&id) {
                    return self;
                }
            }
            CardStackAction::DragStart(index) => {
                if !next.on_drag_start(index) {
                    return self;
                }
            }
            CardStackAction::DragEnd(release) => {
                if let Some(outcome) = next.on_drag_end(release.offset_x, release.velocity_x) {
                    debug!(
                        "Swipe {:?} (offset {:.0}px, velocity {:.0}px/s)",
                        outcome, release.offset_x, release.velocity_x
                    );
                }
            }
            CardStackAction::JumpTo(index) => {
                if let Err(e) = next.jump_to(index) {
                    warn!("Card stack jump rejected: {}", e);
                    return self;
                }
            }
            CardStackAction::ResetGesture => next.reset_gesture(),
        }
        if let Ok(json) = serde_json::to_string(&next.snapshot()) {
            debug!("Card stack: {}", json);
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct MorphingCardStackProps {
    pub initial: CardStack,
    #[prop_or_default]
    pub on_card_click: Option<Callback<Card>>,
}

fn layout_icon(layout: LayoutMode) -> &'static str {
    match layout {
        LayoutMode::Stack => "▤",
        LayoutMode::Grid => "▦",
        LayoutMode::List => "☰",
    }
}

#[function_component(MorphingCardStack)]
pub fn morphing_card_stack(props: &MorphingCardStackProps) -> Html {
    let stack = use_reducer(|| props.initial.clone());
    // Pointer bookkeeping that must not trigger re-renders.
    let gesture = use_mut_ref(PointerSession::default);
    let drag_offset = use_state(|| 0.0_f64);

    {
        let stack = stack.clone();
        use_effect_with_deps(
            move |_| move || stack.dispatch(CardStackAction::ResetGesture),
            (),
        );
    }

    let finish_drag = {
        let stack = stack.clone();
        let gesture = gesture.clone();
        let drag_offset = drag_offset.clone();
        move |e: &PointerEvent| {
            let release = gesture.borrow_mut().finish(f64::from(e.client_x()), e.time_stamp());
            if let Some(release) = release {
                stack.dispatch(CardStackAction::DragEnd(release));
                drag_offset.set(0.0);
            }
        }
    };
    let onpointerup = {
        let finish_drag = finish_drag.clone();
        Callback::from(move |e: PointerEvent| finish_drag(&e))
    };
    let onpointerleave = Callback::from(move |e: PointerEvent| finish_drag(&e));

    let onpointermove = {
        let stack = stack.clone();
        let gesture = gesture.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            let motion = gesture.borrow_mut().motion(f64::from(e.client_x()), e.time_stamp());
            let Some(motion) = motion else {
                return;
            };
            if let Some(card) = motion.started {
                stack.dispatch(CardStackAction::DragStart(card));
            }
            drag_offset.set(motion.offset_x);
        })
    };

    let layout = stack.layout();
    let snapshot = stack.snapshot();

    let layout_toggle = LayoutMode::ALL
        .iter()
        .map(|&mode| {
            let stack = stack.clone();
            let onclick = Callback::from(move |_: MouseEvent| stack.dispatch(CardStackAction::SetLayout(mode)));
            html! {
                <button
                    class={classes!("layout-button", (mode == layout).then(|| "active"))}
                    aria-label={format!("Switch to {} layout", mode.name())}
                    {onclick}
                >
                    {layout_icon(mode)}
                </button>
            }
        })
        .collect::<Html>();

    let cards = snapshot
        .cards
        .iter()
        .map(|placed| {
            let card = &stack.cards()[placed.index];
            let index = placed.index;
            let is_expanded = stack.is_expanded(&card.id);
            let is_top = stack.is_top_card(index);

            let onpointerdown = {
                let gesture = gesture.clone();
                Callback::from(move |e: PointerEvent| {
                    if !is_top {
                        return;
                    }
                    gesture
                        .borrow_mut()
                        .press(index, f64::from(e.client_x()), e.time_stamp());
                })
            };

            let onclick = {
                let stack = stack.clone();
                let gesture = gesture.clone();
                let on_card_click = props.on_card_click.clone();
                let card = card.clone();
                Callback::from(move |_: MouseEvent| {
                    if gesture.borrow_mut().take_swallowed_click() {
                        return;
                    }
                    stack.dispatch(CardStackAction::ToggleExpand(card.id.clone()));
                    if let Some(cb) = &on_card_click {
                        cb.emit(card.clone());
                    }
                })
            };

            let v = placed.visual;
            let shift = if is_top { *drag_offset } else { 0.0 };
            let style = match layout {
                LayoutMode::Stack => format!(
                    "top: {}px; left: {}px; z-index: {}; transform: translateX({}px) rotate({}deg);",
                    v.top, v.left, v.z_index, shift, v.rotate
                ),
                LayoutMode::Grid | LayoutMode::List => String::new(),
            };

            html! {
                <div
                    key={card.id.clone()}
                    class={classes!(
                        "stack-card",
                        is_top.then(|| "top-card"),
                        is_expanded.then(|| "expanded"),
                    )}
                    style={style}
                    {onpointerdown}
                    {onclick}
                >
                    <div class="card-meta">
                        <span class="card-dot" style={format!("background: {};", card.color)}></span>
                        if card.date.is_some() || card.author.is_some() {
                            <span class="card-byline">
                                {card.date.clone().unwrap_or_default()}{" • "}{card.author.clone().unwrap_or_default()}
                            </span>
                        }
                    </div>
                    <h3>{&card.title}</h3>
                    <p class={classes!("card-description", (!is_expanded).then(|| "clamped"))}>{&card.description}</p>
                    if is_top {
                        <div class="swipe-hint">{"Swipe to explore"}</div>
                    }
                </div>
            }
        })
        .collect::<Html>();

    let dots = if layout == LayoutMode::Stack && stack.len() > 1 {
        html! {
            <div class="stack-dots">
                { for (0..stack.len()).map(|index| {
                    let stack = stack.clone();
                    let active = index == snapshot.active_index;
                    let onclick = Callback::from(move |_: MouseEvent| stack.dispatch(CardStackAction::JumpTo(index)));
                    html! {
                        <button
                            class={classes!("stack-dot", active.then(|| "active"))}
                            aria-label={format!("Go to card {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="morphing-stack">
            <div class="layout-toggle">{layout_toggle}</div>
            <div
                class={classes!("cards-container", layout.name())}
                {onpointermove}
                {onpointerup}
                {onpointerleave}
            >
                {cards}
            </div>
            {dots}
            <style>
                {r#"
                .morphing-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 32px;
                    max-width: 1152px;
                    margin: 0 auto;
                }
                .layout-toggle {
                    display: flex;
                    gap: 4px;
                    padding: 4px;
                    margin: 0 auto;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .layout-button {
                    padding: 8px 12px;
                    border-radius: 6px;
                    border: none;
                    background: none;
                    color: #9ca3af;
                    cursor: pointer;
                }
                .layout-button.active {
                    background: #00E5FF;
                    color: #000;
                }
                .cards-container.stack {
                    position: relative;
                    height: 320px;
                    width: 100%;
                    max-width: 384px;
                    margin: 0 auto;
                    touch-action: pan-y;
                }
                .cards-container.grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 16px;
                }
                .cards-container.list {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .stack-card {
                    cursor: pointer;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #121212;
                    padding: 24px;
                    user-select: none;
                    transition: top 0.3s ease, left 0.3s ease, transform 0.3s ease, border-color 0.3s ease;
                }
                .stack-card:hover {
                    border-color: rgba(0, 229, 255, 0.5);
                }
                .cards-container.stack .stack-card {
                    position: absolute;
                    width: 100%;
                    height: 100%;
                    box-sizing: border-box;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.5);
                }
                .cards-container.stack .top-card {
                    cursor: grab;
                }
                .cards-container.grid .stack-card {
                    min-height: 200px;
                }
                .stack-card.expanded {
                    background: #1a1a1a;
                    box-shadow: 0 0 0 1px #00E5FF;
                    transform: scale(1.02);
                }
                .card-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .card-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                }
                .card-byline {
                    font-size: 12px;
                    color: #6b7280;
                    font-family: monospace;
                }
                .card-description {
                    font-size: 14px;
                    color: #9ca3af;
                    line-height: 1.6;
                }
                .card-description.clamped {
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .swipe-hint {
                    position: absolute;
                    bottom: 16px;
                    left: 0;
                    right: 0;
                    text-align: center;
                    font-size: 10px;
                    color: #4b5563;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    pointer-events: none;
                }
                .stack-dots {
                    display: flex;
                    justify-content: center;
                    gap: 8px;
                }
                .stack-dot {
                    height: 6px;
                    width: 6px;
                    border-radius: 9999px;
                    border: none;
                    background: #374151;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .stack-dot.active {
                    width: 24px;
                    background: #00E5FF;
                }
                @media (max-width: 1024px) {
                    .cards-container.grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .cards-container.grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
