use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{PROOF_STATS, TESTIMONIALS};
use crate::transition::stagger;

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    html! {
        <section class="section section-creme" id="resultats">
            <div class="section-inner">
                <Reveal>
                    <div class="section-label">{"RÉSULTATS"}</div>
                    <h2 class="section-title">{"Ce qu'ils "}<em>{"en disent."}</em></h2>
                </Reveal>
                <div class="proof-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={i} delay_ms={stagger(i, 150)}>
                            <div class="proof-card">
                                <span class="proof-open">{"\""}</span>
                                <p class="proof-quote">{t.quote}</p>
                                <div class="proof-author">{t.author}</div>
                                <div class="proof-role">{t.role}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <div class="proof-stats">
                    { for PROOF_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Reveal key={stat.num} delay_ms={stagger(i, 100)}>
                            <div>
                                <div class="proof-stat-num">{stat.num}</div>
                                <div class="proof-stat-label">{stat.label}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
