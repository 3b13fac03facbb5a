use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Classes of the wrapped block, e.g. `feature-card`.
    #[prop_or_default]
    pub class: Classes,
    /// Position inside its grid, used to stagger the transition.
    #[prop_or_default]
    pub order: Option<usize>,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time at least 10% of them scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match node_ref.cast::<Element>() {
                    Some(element) => {
                        let on_intersect = {
                            let revealed = revealed.clone();
                            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        revealed.set(true);
                                        observer.unobserve(&entry.target());
                                    }
                                }
                            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                        };
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(on_intersect);
                                })
                            }
                            Err(_) => {
                                // No observer support: just show the content.
                                revealed.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                destructor
            },
            (),
        );
    }

    let style = props.order.map(|order| format!("--animation-order: {};", order));

    html! {
        <div
            ref={node_ref}
            class={classes!(props.class.clone(), "will-animate", (*revealed).then(|| "animate"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
