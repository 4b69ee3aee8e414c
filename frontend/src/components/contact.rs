use std::rc::Rc;

use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::CONTACT_ANCHOR;
use crate::state::{EmailError, LeadFormState, LeadStep, SimulatedLeadSink};

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactForm {
    form: LeadFormState,
    error: Option<EmailError>,
}

enum ContactAction {
    Input(String),
    Submit,
    UseDifferentEmail,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Input(value) => {
                next.form.set_draft(value);
                next.error = None;
            }
            ContactAction::Submit => match next.form.submit_draft(&SimulatedLeadSink) {
                Ok(()) => next.error = None,
                Err(e) => {
                    warn!("Lead form refused input: {:?}", e);
                    next.error = Some(e);
                }
            },
            ContactAction::UseDifferentEmail => {
                next.form.reset();
                next.error = None;
            }
        }
        if let Ok(json) = serde_json::to_string(&next.form) {
            debug!("Lead form: {}", json);
        }
        next.into()
    }
}

const PERKS: [&str; 3] = [
    "No commitment required",
    "Speak directly with a Senior Architect",
    "Receive a custom roadmap PDF",
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(ContactForm::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };

    let use_different_email = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::UseDifferentEmail))
    };

    let step_view = match state.form.step() {
        LeadStep::CollectingEmail => html! {
            <form class="lead-form" {onsubmit} novalidate={true}>
                <label for="email">{"Work Email"}</label>
                <input
                    type="email"
                    id="email"
                    placeholder="name@company.com"
                    value={state.form.draft().to_string()}
                    {oninput}
                />
                if let Some(error) = &state.error {
                    <p class="form-error">{error.to_string()}</p>
                }
                <button type="submit" class="lead-submit">{"Book Strategy Session"}</button>
                <p class="form-note">{"Limited slots: Only 4 sessions available this week."}</p>
            </form>
        },
        LeadStep::Confirmed => html! {
            <div class="lead-confirmed">
                <div class="confirmed-icon">{"✓"}</div>
                <h3>{"You're almost there!"}</h3>
                <p>
                    {"We've sent a calendar link to "}
                    <span class="confirmed-email">{state.form.email()}</span>
                    {". Please choose a time that works for you."}
                </p>
                <button class="outline-button" onclick={use_different_email}>
                    {"Use different email"}
                </button>
            </div>
        },
    };

    html! {
        <section class="contact-section" id={CONTACT_ANCHOR}>
            <div class="contact-card">
                <div class="contact-pitch">
                    <h2>{"Start Your Transformation"}</h2>
                    <p>{"Book a free 30-minute strategy session. We'll map out your current bottlenecks and propose a unified ecosystem architecture."}</p>
                    <ul>
                        { for PERKS.iter().map(|perk| html! { <li>{"✓ "}{*perk}</li> }) }
                    </ul>
                    <div class="compliance-badge">{"ISO 27001 Certified & GDPR Compliant"}</div>
                </div>
                <div class="contact-form-panel">
                    { step_view }
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 96px 24px;
                    position: relative;
                    overflow: hidden;
                }
                .contact-card {
                    max-width: 896px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 48px;
                    padding: 48px;
                    border-radius: 40px;
                    background: rgba(255, 255, 255, 0.04);
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    border-left: 1px solid rgba(255, 255, 255, 0.2);
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.5);
                }
                .contact-pitch ul {
                    list-style: none;
                    padding: 0;
                    color: #d1d5db;
                }
                .contact-pitch li {
                    margin-bottom: 16px;
                }
                .compliance-badge {
                    font-size: 14px;
                    color: #6b7280;
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 12px;
                    padding: 12px;
                    width: fit-content;
                }
                .contact-form-panel {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 32px;
                }
                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .lead-form input {
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 12px 16px;
                    color: #fff;
                }
                .lead-form input:focus {
                    outline: none;
                    border-color: #00E5FF;
                }
                .form-error {
                    color: #f87171;
                    font-size: 14px;
                    margin: 0;
                }
                .lead-submit {
                    background: #00E5FF;
                    color: #050B14;
                    border: none;
                    border-radius: 12px;
                    padding: 16px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .form-note {
                    font-size: 12px;
                    color: #6b7280;
                    text-align: center;
                }
                .lead-confirmed {
                    text-align: center;
                    padding: 32px 0;
                }
                .confirmed-icon {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 16px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.2);
                    font-size: 28px;
                }
                .confirmed-email {
                    color: #fff;
                    font-weight: 500;
                }
                .outline-button {
                    background: none;
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 9999px;
                    padding: 10px 24px;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .contact-card {
                        grid-template-columns: 1fr;
                        padding: 32px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
