use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FAQ;
use crate::transition::stagger;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span>{props.question}</span>
                <span class="faq-toggle">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section" id="faq">
            <div class="section-inner">
                <Reveal>
                    <div class="section-label">{"QUESTIONS FRÉQUENTES"}</div>
                    <h2 class="section-title">{"Tout ce qu'il faut "}<em>{"savoir."}</em></h2>
                </Reveal>
                <div class="faq-list">
                    { for FAQ.iter().enumerate().map(|(i, entry)| html! {
                        <Reveal key={entry.question} delay_ms={stagger(i, 80)}>
                            <FaqItem question={entry.question} answer={entry.answer} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
