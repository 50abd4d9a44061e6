use yew::prelude::*;

use crate::sections::{
    contact::Contact,
    faq::Faq,
    hero::Hero,
    proof::SocialProof,
    steps::HowItWorks,
    tiers::Tiers,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Hero />
            <HowItWorks />
            <Tiers />
            <SocialProof />
            <Faq />
            <Contact />
        </>
    }
}
