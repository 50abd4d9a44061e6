use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::CONTACT_EMAIL;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    label: &'static str,
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    // Routed pages open at the top, not at the previous scroll offset
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <section class="legal-page">
            <div class="section-inner">
                <Reveal>
                    <div class="section-label">{props.label}</div>
                    <h1 class="section-title">{props.title}</h1>
                    { for props.children.iter() }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(LegalNotice)]
pub fn legal_notice() -> Html {
    html! {
        <LegalPage label="INFORMATIONS" title="Mentions légales">
            <p>{"Ce site est édité par La Loge, conciergerie beauté mettant en relation marques professionnelles et salons de coiffure et de beauté."}</p>
            <p>
                {"Contact : "}
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
            </p>
            <p>{"Les contenus de ce site (textes, chiffres, visuels) sont fournis à titre informatif et ne constituent pas une offre contractuelle."}</p>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage label="DONNÉES PERSONNELLES" title="Confidentialité">
            <p>{"Ce site ne dépose aucun cookie de suivi et ne transmet aucune donnée à des tiers."}</p>
            <p>{"Les informations saisies dans le formulaire de contact ne sont ni envoyées ni conservées en ligne : elles restent dans votre navigateur."}</p>
            <p>
                {"Pour toute question : "}
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
            </p>
        </LegalPage>
    }
}
