use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::STEPS;
use crate::transition::stagger;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let last = STEPS.len().saturating_sub(1);

    html! {
        <section class="section" id="methode">
            <div class="section-inner">
                <Reveal>
                    <div class="section-label">{"COMMENT ÇA FONCTIONNE"}</div>
                    <h2 class="section-title">{"Le salon choisit."}<br /><em>{"La marque se présente."}</em></h2>
                    <p class="section-subtitle">
                        {"Nous représentons le salon, pas la marque. C'est ce qui rend nos leads authentiques."}
                    </p>
                </Reveal>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal key={step.num} delay_ms={stagger(i, 100)}>
                            <div class="step">
                                <div class="step-num">{step.num}</div>
                                <div class="step-title">{step.title}</div>
                                <div class="step-desc">{step.desc}</div>
                                if i < last {
                                    <div class="step-arrow" />
                                }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
