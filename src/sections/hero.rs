use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config;
use crate::content::{HeroPanel, HERO_BRANDS, HERO_SALONS};
use crate::transition::{divider_style, ENTRANCE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroSide {
    Left,
    Right,
}

/// Which hero panel the pointer is over, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroHover {
    #[default]
    Neutral,
    Left,
    Right,
}

impl HeroHover {
    pub fn enter(self, side: HeroSide) -> Self {
        match side {
            HeroSide::Left => HeroHover::Left,
            HeroSide::Right => HeroHover::Right,
        }
    }

    /// Leaving a panel only clears the hover if that panel held it.
    pub fn leave(self, side: HeroSide) -> Self {
        match (self, side) {
            (HeroHover::Left, HeroSide::Left) | (HeroHover::Right, HeroSide::Right) => HeroHover::Neutral,
            (state, _) => state,
        }
    }

    /// Divider badge position, pushed towards the side being shrunk.
    pub fn divider_left(self) -> &'static str {
        match self {
            HeroHover::Neutral => "50%",
            HeroHover::Left => "70%",
            HeroHover::Right => "30%",
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            HeroHover::Neutral => None,
            HeroHover::Left => Some("hover-left"),
            HeroHover::Right => Some("hover-right"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(HeroSide),
    Leave(HeroSide),
}

// Pointer events can land before the next render, so transitions are
// applied to the latest state rather than a captured copy.
impl Reducible for HeroHover {
    type Action = HoverEvent;

    fn reduce(self: Rc<Self>, action: HoverEvent) -> Rc<Self> {
        let next = match action {
            HoverEvent::Enter(side) => self.enter(side),
            HoverEvent::Leave(side) => self.leave(side),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct HeroSideProps {
    side: HeroSide,
    loaded: bool,
    /// Entrance delay of the first line; each following line adds 150ms.
    base_delay_ms: u32,
    on_hover: Callback<HoverEvent>,
}

fn panel(side: HeroSide) -> &'static HeroPanel {
    match side {
        HeroSide::Left => &HERO_BRANDS,
        HeroSide::Right => &HERO_SALONS,
    }
}

#[function_component(HeroSidePanel)]
fn hero_side_panel(props: &HeroSideProps) -> Html {
    let HeroSideProps { side, loaded, base_delay_ms, on_hover } = props;
    let side = *side;
    let copy = panel(side);
    let anim = |step: u32| ENTRANCE.style(*loaded, base_delay_ms + step * 150);

    let (side_class, button_class) = match side {
        HeroSide::Left => ("hero-left", "btn-light"),
        HeroSide::Right => ("hero-right", "btn-dark"),
    };

    let onmouseenter = {
        let on_hover = on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(HoverEvent::Enter(side)))
    };
    let onmouseleave = {
        let on_hover = on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(HoverEvent::Leave(side)))
    };

    let (lead, last) = copy.title.split_at(copy.title.len().saturating_sub(1));

    html! {
        <div class={classes!("hero-side", side_class, "noise")} {onmouseenter} {onmouseleave}>
            <div class="hero-content">
                <div style={anim(0)}><div class="hero-label">{copy.label}</div></div>
                <div style={anim(1)}>
                    <h1 class="hero-title">
                        { for lead.iter().map(|line| html! { <>{*line}<br /></> }) }
                        { for last.iter().map(|line| html! { <em>{*line}</em> }) }
                    </h1>
                </div>
                <div style={anim(2)}>
                    <p class="hero-desc">{copy.desc}</p>
                </div>
                <div style={anim(3)}>
                    <a href={copy.cta.href} class={classes!("hero-btn", button_class)}>{copy.cta.label}</a>
                </div>
                <div class="hero-stat" style={anim(4)}>
                    { for copy.stats.iter().map(|stat| html! {
                        <div>
                            <span class="stat-num">{stat.num}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let loaded = use_state(|| false);
    let hover = use_reducer(HeroHover::default);

    {
        let loaded = loaded.clone();
        use_mount(move || {
            Timeout::new(config::HERO_LOAD_DELAY_MS, move || loaded.set(true)).forget();
        });
    }

    let on_hover = {
        let dispatcher = hover.dispatcher();
        Callback::from(move |event: HoverEvent| dispatcher.dispatch(event))
    };

    html! {
        <section class={classes!("hero", hover.class())}>
            <HeroSidePanel side={HeroSide::Left} loaded={*loaded} base_delay_ms={200} on_hover={on_hover.clone()} />
            <HeroSidePanel side={HeroSide::Right} loaded={*loaded} base_delay_ms={300} {on_hover} />
            <div class="hero-divider" style={divider_style(*loaded, hover.divider_left())}>
                <span>{"×"}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_centres_divider() {
        assert_eq!(HeroHover::default().divider_left(), "50%");
        assert_eq!(HeroHover::default().class(), None);
    }

    #[test]
    fn hovering_pushes_divider_away() {
        let left = HeroHover::Neutral.enter(HeroSide::Left);
        assert_eq!(left.divider_left(), "70%");
        assert_eq!(left.class(), Some("hover-left"));

        let right = HeroHover::Neutral.enter(HeroSide::Right);
        assert_eq!(right.divider_left(), "30%");
    }

    #[test]
    fn leaving_returns_to_centre() {
        let state = HeroHover::Neutral.enter(HeroSide::Right).leave(HeroSide::Right);
        assert_eq!(state, HeroHover::Neutral);
        assert_eq!(state.divider_left(), "50%");
    }

    #[test]
    fn crossing_panels_keeps_new_side() {
        // enter(right) may arrive before leave(left)
        let state = HeroHover::Left.enter(HeroSide::Right).leave(HeroSide::Left);
        assert_eq!(state, HeroHover::Right);
    }

    #[test]
    fn reducer_applies_events_in_order() {
        let state = Rc::new(HeroHover::Neutral)
            .reduce(HoverEvent::Enter(HeroSide::Left))
            .reduce(HoverEvent::Enter(HeroSide::Right))
            .reduce(HoverEvent::Leave(HeroSide::Left));
        assert_eq!(*state, HeroHover::Right);

        let state = state.reduce(HoverEvent::Leave(HeroSide::Right));
        assert_eq!(state.divider_left(), "50%");
    }
}
