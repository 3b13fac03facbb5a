use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::components::slider_state::{Bounds, PointerSample, SliderState};
use crate::config::DEFAULT_REVEAL_PERCENT;
use crate::dom::Listener;

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub before_src: AttrValue,
    pub after_src: AttrValue,
    #[prop_or(AttrValue::from("Before"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::from("After"))]
    pub after_label: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    /// Bumped by the owning tab panel each time it is activated; every change
    /// puts the slider back to 50%.
    #[prop_or_default]
    pub reset: u32,
}

/// The three elements a slider needs, resolved once before any listener is wired.
struct SliderElements {
    container: HtmlElement,
    handle: HtmlElement,
    after: HtmlElement,
}

impl SliderElements {
    fn resolve(container: &NodeRef, handle: &NodeRef, after: &NodeRef) -> Option<Self> {
        Some(Self {
            container: container.cast::<HtmlElement>()?,
            handle: handle.cast::<HtmlElement>()?,
            after: after.cast::<HtmlElement>()?,
        })
    }

    fn bounds(&self) -> Bounds {
        let rect = self.container.get_bounding_client_rect();
        Bounds { left: rect.left(), width: rect.width() }
    }

    fn paint(&self, state: &SliderState) {
        let width = format!("{}%", state.after_width());
        let left = format!("{}%", state.handle_offset());
        let _ = self.after.style().set_property("width", &width);
        let _ = self.handle.style().set_property("left", &left);
        let _ = self
            .handle
            .set_attribute("aria-valuenow", &format!("{:.0}", state.reveal_percent()));
    }
}

fn follow_pointer(state: &RefCell<SliderState>, elements: &SliderElements, sample: PointerSample) {
    let mut state = state.borrow_mut();
    if !state.is_dragging() {
        return;
    }
    if state.update_drag(sample, elements.bounds()) {
        elements.paint(&state);
    }
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterProps) -> Html {
    let container_ref = use_node_ref();
    let handle_ref = use_node_ref();
    let after_ref = use_node_ref();
    let state = use_mut_ref(SliderState::default);

    {
        let container_ref = container_ref.clone();
        let handle_ref = handle_ref.clone();
        let after_ref = after_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (
                    SliderElements::resolve(&container_ref, &handle_ref, &after_ref),
                    web_sys::window(),
                ) {
                    (Some(elements), Some(window)) => {
                        let elements = Rc::new(elements);
                        state.borrow_mut().set_reveal(DEFAULT_REVEAL_PERCENT);
                        elements.paint(&state.borrow());

                        let press = {
                            let state = state.clone();
                            move |event: web_sys::Event| {
                                event.prevent_default();
                                state.borrow_mut().begin_drag();
                            }
                        };
                        let release = {
                            let state = state.clone();
                            move |_: web_sys::Event| state.borrow_mut().end_drag()
                        };
                        let mouse_move = {
                            let state = state.clone();
                            let elements = elements.clone();
                            move |event: web_sys::Event| {
                                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                    follow_pointer(&state, &elements, PointerSample::from_mouse(event));
                                }
                            }
                        };
                        let touch_move = {
                            let state = state.clone();
                            let elements = elements.clone();
                            move |event: web_sys::Event| {
                                if let Some(event) = event.dyn_ref::<TouchEvent>() {
                                    follow_pointer(&state, &elements, PointerSample::from_touch(event));
                                }
                            }
                        };

                        // Move/release are heard on the whole window so a drag can't get
                        // stuck when the pointer leaves the slider.
                        let listeners: Vec<Listener> = [
                            Listener::new_active(&elements.handle, "mousedown", press.clone()),
                            Listener::new_active(&elements.handle, "touchstart", press),
                            Listener::new(&window, "mousemove", mouse_move),
                            Listener::new(&window, "touchmove", touch_move),
                            Listener::new(&window, "mouseup", release.clone()),
                            Listener::new(&window, "touchend", release),
                        ]
                        .into_iter()
                        .flatten()
                        .collect();

                        Box::new(move || drop(listeners))
                    }
                    _ => {
                        log::debug!("Before/after slider is missing its handle or after layer, skipping");
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (),
        );
    }

    {
        let container_ref = container_ref.clone();
        let handle_ref = handle_ref.clone();
        let after_ref = after_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(elements) = SliderElements::resolve(&container_ref, &handle_ref, &after_ref) {
                    let mut state = state.borrow_mut();
                    state.end_drag();
                    state.set_reveal(DEFAULT_REVEAL_PERCENT);
                    elements.paint(&state);
                }
                || ()
            },
            props.reset,
        );
    }

    html! {
        <div class="before-after-slider" ref={container_ref}>
            <style>
                {r#"
                    .before-after-slider {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                        border-radius: 12px;
                        user-select: none;
                        touch-action: pan-y;
                    }
                    .before-after-slider img {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .before-after-slider .before-container img {
                        width: 100%;
                    }
                    .before-after-slider .after-container {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        overflow: hidden;
                    }
                    .before-after-slider .after-container img {
                        width: auto;
                        min-width: 100%;
                    }
                    .before-after-slider .slider-handle {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        margin-left: -2px;
                        background: #fff;
                        cursor: ew-resize;
                        touch-action: none;
                    }
                    .before-after-slider .slider-handle::after {
                        content: "";
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 40px;
                        height: 40px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
                    }
                    .before-after-slider .slider-label {
                        position: absolute;
                        bottom: 12px;
                        padding: 4px 10px;
                        border-radius: 4px;
                        background: rgba(0, 0, 0, 0.55);
                        color: #fff;
                        font-size: 0.8rem;
                    }
                    .before-after-slider .slider-label.before { right: 12px; }
                    .before-after-slider .slider-label.after { left: 12px; }
                "#}
            </style>
            <div class="before-container">
                <img src={props.before_src.clone()} alt={format!("{} (before)", props.alt)} draggable="false" />
                <span class="slider-label before">{props.before_label.clone()}</span>
            </div>
            <div class="after-container" ref={after_ref} style="width: 50%;">
                <img src={props.after_src.clone()} alt={format!("{} (after)", props.alt)} draggable="false" />
                <span class="slider-label after">{props.after_label.clone()}</span>
            </div>
            <div
                class="slider-handle"
                ref={handle_ref}
                style="left: 50%;"
                role="slider"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow="50"
                aria-label="Drag to compare before and after"
            ></div>
        </div>
    }
}
