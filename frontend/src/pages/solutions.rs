use yew::prelude::*;

use crate::components::detail::{to_contact, DetailHeader};
use crate::content::SOLUTIONS;

/// First word of the title, used on the "Consult on ..." buttons.
fn short_name(title: &str) -> &str {
    title.split_whitespace().next().unwrap_or(title)
}

#[function_component(SolutionsPage)]
pub fn solutions_page() -> Html {
    html! {
        <section class="detail-page">
            <div class="detail-inner">
                <DetailHeader
                    lead="Our "
                    accent="Solutions"
                    trail=" Ecosystem"
                    intro="We offer a comprehensive suite of digital technologies designed to solve complex enterprise challenges. From immersive realities to intelligent backends, we build it all."
                />
                <div class="solution-grid">
                    { for SOLUTIONS.iter().map(|solution| html! {
                        <div class="solution-card" key={solution.id}>
                            <div
                                class="solution-icon"
                                style={format!("background: {0}20; color: {0};", solution.color)}
                            >
                                {"◆"}
                            </div>
                            <h3>{solution.title}</h3>
                            <p>{solution.description}</p>
                            <div class="capabilities-label">{"Capabilities"}</div>
                            <ul>
                                { for solution.capabilities.iter().map(|cap| html! { <li>{*cap}</li> }) }
                            </ul>
                            <button class="outline-button wide" onclick={to_contact()}>
                                {format!("Consult on {}", short_name(solution.title))}
                            </button>
                        </div>
                    }) }
                </div>
                <div class="detail-cta">
                    <h3>{"Not sure what you need?"}</h3>
                    <button class="primary-button" onclick={to_contact()}>{"Book a Discovery Call"}</button>
                </div>
            </div>
            <style>
                {r#"
                .solution-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 32px;
                }
                .solution-card {
                    background: #0A0A0A;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 32px;
                    transition: background 0.3s ease, border-color 0.3s ease;
                }
                .solution-card:hover {
                    background: #111;
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .solution-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 24px;
                    margin-bottom: 24px;
                }
                .solution-card p {
                    color: #9ca3af;
                    min-height: 80px;
                }
                .capabilities-label {
                    font-size: 12px;
                    font-weight: 600;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .solution-card ul {
                    padding-left: 18px;
                    color: #d1d5db;
                    font-size: 14px;
                    line-height: 1.9;
                    margin-bottom: 32px;
                }
                .outline-button.wide {
                    width: 100%;
                }
                .detail-cta {
                    margin-top: 96px;
                    text-align: center;
                }
                @media (max-width: 1024px) {
                    .solution-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .solution-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::short_name;

    #[test]
    fn consult_label_uses_first_word() {
        assert_eq!(short_name("Internet of Things (IoT)"), "Internet");
        assert_eq!(short_name(""), "");
    }
}
