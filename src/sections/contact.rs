use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{AudienceForm, BRAND_FORM, CTA_STEPS, SALON_FORM, SELECT_PLACEHOLDER};

/// Who is filling in the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Brand,
    Salon,
}

impl Audience {
    pub const ALL: [Audience; 2] = [Audience::Brand, Audience::Salon];

    pub fn form(self) -> &'static AudienceForm {
        match self {
            Audience::Brand => &BRAND_FORM,
            Audience::Salon => &SALON_FORM,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Audience::Brand => "marque",
            Audience::Salon => "salon",
        }
    }
}

/// What the form collects. Nothing sends it anywhere yet; this is the
/// payload a future endpoint is expected to accept.
#[derive(Debug, PartialEq, Serialize)]
pub struct LeadDraft {
    pub audience: Audience,
    pub organisation: String,
    pub contact_name: String,
    pub email: String,
    pub detail: Option<String>,
}

impl LeadDraft {
    pub fn new(audience: Audience, organisation: String, contact_name: String, email: String, detail: String) -> Self {
        Self {
            audience,
            organisation: organisation.trim().to_string(),
            contact_name: contact_name.trim().to_string(),
            email: email.trim().to_string(),
            // A choice that isn't one of this audience's options never
            // came from the current select.
            detail: Some(detail).filter(|d| audience.form().detail_options.contains(&d.as_str())),
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let audience = use_state(Audience::default);
    let organisation_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let detail_ref = use_node_ref();

    let form = audience.form();

    let onsubmit = {
        let audience = *audience;
        let organisation_ref = organisation_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let detail_ref = detail_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = LeadDraft::new(
                audience,
                input_value(&organisation_ref),
                input_value(&name_ref),
                input_value(&email_ref),
                select_value(&detail_ref),
            );
            match serde_json::to_string(&draft) {
                Ok(json) => info!("No contact endpoint configured, dropping lead draft: {}", json),
                Err(err) => warn!("Failed to serialize lead draft: {}", err),
            }
        })
    };

    html! {
        <form class="cta-form" {onsubmit}>
            <div class="form-tabs">
                { for Audience::ALL.iter().map(|&option| {
                    let onclick = {
                        let audience = audience.clone();
                        Callback::from(move |_: MouseEvent| audience.set(option))
                    };
                    html! {
                        <button
                            type="button"
                            key={option.key()}
                            class={classes!("form-tab", (*audience == option).then(|| "active"))}
                            {onclick}
                        >
                            {option.form().tab_label}
                        </button>
                    }
                }) }
            </div>
            <div class="form-group">
                <label class="form-label">{form.organisation_label}</label>
                <input ref={organisation_ref} class="form-input" placeholder={form.organisation_placeholder} />
            </div>
            <div class="form-group">
                <label class="form-label">{"VOTRE NOM"}</label>
                <input ref={name_ref} class="form-input" placeholder="Prénom Nom" />
            </div>
            <div class="form-group">
                <label class="form-label">{"EMAIL PROFESSIONNEL"}</label>
                <input ref={email_ref} class="form-input" type="email" placeholder="vous@entreprise.com" />
            </div>
            // Keyed so switching audience rebuilds the select instead of
            // patching its options under the previous selection.
            <div class="form-detail">
                <div class="form-group" key={audience.key()}>
                    <label class="form-label">{form.detail_label}</label>
                    <select ref={detail_ref} class="form-select">
                        <option value="">{SELECT_PLACEHOLDER}</option>
                        { for form.detail_options.iter().map(|option| html! { <option value={*option}>{*option}</option> }) }
                    </select>
                </div>
            </div>
            <button type="submit" class="form-submit">{form.submit_label}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section class="cta-section noise" id="contact">
            <div class="cta-inner">
                <Reveal>
                    <div>
                        <div class="section-label">{"COMMENCER"}</div>
                        <h2 class="cta-title">{"Prêt à transformer"}<br />{"votre "}<em>{"approche salon ?"}</em></h2>
                        <p class="cta-desc">
                            {"30 minutes pour comprendre votre marque, vos objectifs, vos zones prioritaires. Sans engagement."}
                        </p>
                        <div class="cta-steps">
                            { for CTA_STEPS.iter().map(|step| html! {
                                <div class="cta-step" key={step.num}>
                                    <span class="cta-step-num">{step.num}</span>
                                    <span class="cta-step-text">{step.text}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <ContactForm />
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_is_the_default_tab() {
        assert_eq!(Audience::default(), Audience::Brand);
    }

    #[test]
    fn each_audience_selects_its_own_fields() {
        let brand = Audience::Brand.form();
        assert_eq!(brand.organisation_label, "NOM DE LA MARQUE");
        assert_eq!(brand.detail_label, "OBJECTIF PRINCIPAL");
        assert!(brand.detail_options.contains(&"Lancement de gamme"));

        let salon = Audience::Salon.form();
        assert_eq!(salon.organisation_label, "NOM DU SALON");
        assert_eq!(salon.detail_label, "NOMBRE DE FAUTEUILS");
        assert_eq!(salon.detail_options.len(), 3);
    }

    #[test]
    fn only_one_field_set_is_active() {
        for audience in Audience::ALL {
            let form = audience.form();
            for other in Audience::ALL.into_iter().filter(|a| *a != audience) {
                let other = other.form();
                assert_ne!(form.tab_label, other.tab_label);
                assert_ne!(form.organisation_label, other.organisation_label);
                assert_ne!(form.organisation_placeholder, other.organisation_placeholder);
                assert_ne!(form.detail_label, other.detail_label);
                assert_ne!(form.submit_label, other.submit_label);
                assert!(form.detail_options.iter().all(|o| !other.detail_options.contains(o)));
            }
        }
    }

    #[test]
    fn draft_drops_detail_from_the_other_audience() {
        // brand picked "Déploiement national", then the salon tab was selected
        let draft = LeadDraft::new(
            Audience::Salon,
            "Salon Élégance".into(),
            "Camille Martin".into(),
            "camille@example.com".into(),
            "Déploiement national".into(),
        );
        assert_eq!(draft.detail, None);

        let draft = LeadDraft::new(
            Audience::Salon,
            "Salon Élégance".into(),
            "Camille Martin".into(),
            "camille@example.com".into(),
            "9+ fauteuils".into(),
        );
        assert_eq!(draft.detail.as_deref(), Some("9+ fauteuils"));
    }

    #[test]
    fn draft_trims_fields_and_drops_empty_detail() {
        let draft = LeadDraft::new(
            Audience::Salon,
            " Salon Élégance ".into(),
            "Camille Martin".into(),
            "camille@example.com ".into(),
            String::new(),
        );
        assert_eq!(draft.organisation, "Salon Élégance");
        assert_eq!(draft.email, "camille@example.com");
        assert_eq!(draft.detail, None);
    }

    #[test]
    fn draft_serializes_audience_in_lowercase() {
        let draft = LeadDraft::new(
            Audience::Brand,
            "Maison Test".into(),
            "Alex Dupont".into(),
            "alex@example.com".into(),
            "Déploiement national".into(),
        );
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["audience"], "brand");
        assert_eq!(json["detail"], "Déploiement national");
    }
}
