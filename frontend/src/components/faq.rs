use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::content::FAQS;
use crate::state::viewport::is_mobile;
use crate::state::AccordionState;

impl Reducible for AccordionState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(index);
        next.into()
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // First question starts open.
    let accordion = use_reducer(|| AccordionState::new(FAQS.len(), Some(0)));
    let (width, _) = use_window_size();

    html! {
        <section class={classes!("faq-section", is_mobile(width).then(|| "compact"))}>
            <div class="faq-header">
                <h2>{"Common Questions"}</h2>
                <p>{"Everything you need to understand our process and how we drive value for your enterprise."}</p>
            </div>
            <div class="faq-panel">
                { for FAQS.iter().enumerate().map(|(index, entry)| {
                    let is_open = accordion.is_open(index);
                    let onclick = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.dispatch(index);
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" {onclick}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            if is_open {
                                <div class="faq-answer">{entry.answer}</div>
                            }
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 160px 80px;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    perspective: 1000px;
                }
                .faq-section.compact {
                    padding: 80px 8px;
                }
                .faq-header {
                    text-align: center;
                    margin-bottom: 48px;
                }
                .faq-header h2 {
                    font-size: 56px;
                    margin-bottom: 24px;
                }
                .faq-section.compact .faq-header h2 {
                    font-size: 36px;
                }
                .faq-header p {
                    color: #9ca3af;
                    max-width: 576px;
                    margin: 0 auto;
                    font-size: 18px;
                }
                .faq-panel {
                    max-width: 1024px;
                    margin: 0 auto;
                    padding: 16px;
                    border-radius: 30px;
                    border: 4px solid #6C6C6C;
                    background: #222222;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .faq-item {
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: background-color 0.3s ease, border-color 0.3s ease;
                }
                .faq-item.open {
                    background: rgba(255, 255, 255, 0.03);
                    border-color: rgba(0, 229, 255, 0.3);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 24px;
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 18px;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-item.open .faq-question {
                    color: #fff;
                }
                .toggle-icon {
                    margin-left: 16px;
                    color: #6B7280;
                }
                .faq-item.open .toggle-icon {
                    color: #00E5FF;
                }
                .faq-answer {
                    padding: 0 24px 24px;
                    color: #9ca3af;
                    line-height: 1.7;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                "#}
            </style>
        </section>
    }
}
