use yew::prelude::*;

use crate::components::detail::{to_contact, DetailHeader};
use crate::content::CASE_DETAILS;

#[function_component(CaseStudiesPage)]
pub fn case_studies_page() -> Html {
    html! {
        <section class="detail-page">
            <div class="detail-inner">
                <DetailHeader
                    lead="Client "
                    accent="Success Stories"
                    intro="See how we've helped global enterprises transform their operations and customer experiences through technology."
                />
                <div class="case-list">
                    { for CASE_DETAILS.iter().enumerate().map(|(i, study)| html! {
                        <article class={classes!("case-detail", (i % 2 == 1).then(|| "reversed"))}>
                            <div class="case-image">
                                <img src={study.image} alt={study.title} loading="lazy" decoding="async" />
                            </div>
                            <div class="case-body">
                                <div class="case-client">{study.client}</div>
                                <h2>{study.title}</h2>
                                <div class="case-tags">
                                    { for study.tags.iter().map(|tag| html! { <span class="case-tag">{*tag}</span> }) }
                                </div>
                                <h4>{"The Challenge"}</h4>
                                <p>{study.challenge}</p>
                                <h4>{"Our Solution"}</h4>
                                <p>{study.solution}</p>
                                <div class="case-results">
                                    <h4>{"Key Results"}</h4>
                                    <ul>
                                        { for study.results.iter().map(|r| html! { <li>{*r}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </article>
                    }) }
                </div>
                <div class="detail-cta">
                    <h3>{"Want results like these?"}</h3>
                    <button class="primary-button" onclick={to_contact()}>{"Start Your Project"}</button>
                </div>
            </div>
            <style>
                {r#"
                .case-list {
                    display: flex;
                    flex-direction: column;
                    gap: 96px;
                }
                .case-detail {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 48px;
                    align-items: center;
                }
                .case-detail.reversed .case-image {
                    order: 2;
                }
                .case-image img {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    border-radius: 24px;
                    transition: transform 0.7s ease;
                }
                .case-image img:hover {
                    transform: scale(1.05);
                }
                .case-client {
                    color: #00E5FF;
                    font-weight: 600;
                    font-size: 14px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .case-body h2 {
                    font-size: 36px;
                    margin: 8px 0 16px;
                }
                .case-tags {
                    display: flex;
                    gap: 8px;
                    flex-wrap: wrap;
                    margin-bottom: 24px;
                }
                .case-tag {
                    padding: 4px 12px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 12px;
                    color: #d1d5db;
                }
                .case-body h4 {
                    margin-bottom: 8px;
                }
                .case-body p {
                    color: #9ca3af;
                    line-height: 1.7;
                }
                .case-results {
                    margin-top: 24px;
                    padding: 24px;
                    border-radius: 16px;
                    background: rgba(0, 229, 255, 0.05);
                    border: 1px solid rgba(0, 229, 255, 0.15);
                }
                .case-results ul {
                    padding-left: 18px;
                    margin: 0;
                    line-height: 1.9;
                }
                .detail-cta {
                    margin-top: 96px;
                    text-align: center;
                }
                @media (max-width: 1024px) {
                    .case-detail {
                        grid-template-columns: 1fr;
                    }
                    .case-detail.reversed .case-image {
                        order: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
