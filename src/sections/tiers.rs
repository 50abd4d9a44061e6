use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::TIERS;
use crate::transition::stagger;

#[function_component(Tiers)]
pub fn tiers() -> Html {
    html! {
        <section class="section section-dark noise" id="offre">
            <div class="section-inner">
                <Reveal>
                    <div class="section-label">{"OFFRE PARTENAIRES"}</div>
                    <h2 class="section-title">{"Trois niveaux."}<br /><em>{"Un seul objectif."}</em></h2>
                </Reveal>
                <div class="tiers-grid">
                    { for TIERS.iter().enumerate().map(|(i, tier)| html! {
                        <Reveal key={tier.name} delay_ms={stagger(i, 120)}>
                            <div class={classes!("tier-card", tier.featured.then(|| "tier-featured"))}>
                                <div class="tier-badge">{tier.name}</div>
                                <div class="tier-price">{tier.price}</div>
                                <div class="tier-unit">{tier.unit}</div>
                                <ul class="tier-features">
                                    { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <div class="tier-ideal">{format!("Idéal pour : {}", tier.ideal)}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
