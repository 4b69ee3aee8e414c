use yew::prelude::*;

use crate::components::detail::{to_contact, DetailHeader};
use crate::content::PHASES;

#[function_component(ApproachPage)]
pub fn approach_page() -> Html {
    html! {
        <section class="detail-page">
            <div class="detail-inner">
                <DetailHeader
                    lead="The "
                    accent="GoPhygital"
                    trail=" Methodology"
                    intro="Our process is built on transparency, agility, and engineering excellence. Here is exactly how we take your idea from concept to enterprise-grade reality."
                />
                <div class="phase-timeline">
                    { for PHASES.iter().enumerate().map(|(i, phase)| html! {
                        <div class={classes!("phase", (i % 2 == 1).then(|| "flipped"))}>
                            <div class="phase-marker">{format!("{:02}", i + 1)}</div>
                            <div class="phase-body">
                                <h3>{phase.title}</h3>
                                <p>{phase.desc}</p>
                                <div class="deliverables">
                                    <h4>{"Key Deliverables"}</h4>
                                    <ul>
                                        { for phase.deliverables.iter().map(|d| html! { <li>{*d}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="detail-cta">
                    <h3>{"Ready to start phase one?"}</h3>
                    <button class="primary-button" onclick={to_contact()}>{"Schedule Discovery Workshop"}</button>
                </div>
            </div>
            <style>
                {r#"
                .phase-timeline {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 64px;
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    padding-left: 48px;
                }
                .phase {
                    position: relative;
                }
                .phase-marker {
                    position: absolute;
                    left: -72px;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #050B14;
                    border: 1px solid #00E5FF;
                    color: #00E5FF;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: monospace;
                }
                .phase-body h3 {
                    font-size: 30px;
                    margin-top: 0;
                }
                .phase-body p {
                    color: #9ca3af;
                    font-size: 18px;
                    max-width: 640px;
                }
                .deliverables {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 24px;
                    max-width: 560px;
                }
                .phase.flipped .deliverables {
                    border-color: rgba(0, 229, 255, 0.15);
                }
                .deliverables h4 {
                    font-size: 12px;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-top: 0;
                }
                .deliverables ul {
                    padding-left: 18px;
                    color: #d1d5db;
                    line-height: 1.9;
                    margin: 0;
                }
                .detail-cta {
                    margin-top: 96px;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}
