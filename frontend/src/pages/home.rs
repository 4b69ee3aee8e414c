use yew::prelude::*;

use crate::components::case_carousel::SocialProof;
use crate::components::clients::Clients;
use crate::components::faq::Faq;
use crate::components::sections::{Ecosystem, Hero, Insights, Services};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Clients />
            <Ecosystem />
            <Services />
            <SocialProof />
            <Insights />
            <Faq />
        </>
    }
}
