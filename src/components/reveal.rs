use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::reveal::{IntersectionSample, RevealController, ViewportNotifier};
use crate::transition::REVEAL;

struct IntersectionViewport {
    observer: IntersectionObserver,
}

impl ViewportNotifier for IntersectionViewport {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

type SharedController = Rc<RefCell<Option<RevealController<IntersectionViewport>>>>;

/// A controller wired to a live observer. The closure has to outlive the
/// observer, so both are dropped together in `detach`.
struct AttachedReveal {
    controller: SharedController,
    _callback: Closure<dyn FnMut(Array)>,
}

/// The element worth watching, if any. A block that already revealed keeps
/// its state across re-attachment and needs no new observer.
fn target_to_watch<T>(target: Option<T>, already_visible: bool) -> Option<T> {
    match target {
        Some(_) if already_visible => {
            debug!("block already revealed, skipping observer");
            None
        }
        Some(target) => Some(target),
        None => {
            debug!("reveal node not mounted, skipping observer");
            None
        }
    }
}

impl AttachedReveal {
    fn attach(
        target: Option<Element>,
        already_visible: bool,
        threshold: f64,
        on_reveal: Callback<()>,
    ) -> Option<Self> {
        let target = target_to_watch(target, already_visible)?;

        let controller: SharedController = Rc::new(RefCell::new(None));
        let callback = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |entries: Array| {
                let revealed = match controller.borrow_mut().as_mut() {
                    Some(controller) => entries.iter().any(|entry| {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        controller.on_sample(IntersectionSample {
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        })
                    }),
                    None => false,
                };
                if revealed {
                    on_reveal.emit(());
                }
            }) as Box<dyn FnMut(Array)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("failed to create IntersectionObserver: {:?}", err);
                return None;
            }
        };

        *controller.borrow_mut() = Some(RevealController::mount(
            IntersectionViewport { observer },
            Some(target),
            threshold,
        ));

        Some(Self {
            controller,
            _callback: callback,
        })
    }

    fn detach(self) {
        if let Some(mut controller) = self.controller.borrow_mut().take() {
            controller.teardown();
            debug!("reveal detached: {:?}", controller.state());
        }
    }
}

/// Returns a node ref to attach to the watched element and whether it has
/// been revealed yet.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let already_visible = *visible;
        use_effect_with_deps(
            move |threshold| {
                let on_reveal = Callback::from(move |_| visible.set(true));
                let attached =
                    AttachedReveal::attach(node.cast::<Element>(), already_visible, *threshold, on_reveal);
                move || {
                    if let Some(attached) = attached {
                        attached.detach();
                    }
                }
            },
            threshold,
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_reveal(props.threshold);

    html! {
        <div ref={node} class={props.class.clone()} style={REVEAL.style(visible, props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_block_is_watched() {
        assert_eq!(target_to_watch(Some(7u32), false), Some(7));
    }

    #[test]
    fn revealed_block_is_not_watched_again() {
        // threshold changes re-run the effect after the block is on screen
        assert_eq!(target_to_watch(Some(7u32), true), None);
    }

    #[test]
    fn missing_node_is_not_watched() {
        assert_eq!(target_to_watch(None::<u32>, false), None);
        assert_eq!(target_to_watch(None::<u32>, true), None);
    }
}
