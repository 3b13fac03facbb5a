//! Small wrappers around the browser APIs the page sections share.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }

    /// Same as `new`, but registered as non-passive so the callback may call
    /// `prevent_default` on touch events.
    pub fn new_active<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Returns the element id an in-page link points at, or `None` for a bare `#`
/// or a link that leaves the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::HEADER_OFFSET_PX
}

/// Smoothly scrolls to the element an anchor refers to. Returns false when the
/// href isn't an in-page target or no element carries that id.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match target {
        Some(element) => {
            smooth_scroll_to(anchor_scroll_top(element.offset_top() as f64));
            true
        }
        None => {
            log::debug!("No anchor target for {}", href);
            false
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > config::STICKY_HEADER_AFTER_PX
}

pub fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_AFTER_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_target_strips_hash() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn external_links_are_not_anchors() {
        assert_eq!(anchor_target("https://example.com/#x"), None);
        assert_eq!(anchor_target("mailto:someone@example.com"), None);
    }

    #[test]
    fn anchor_scroll_leaves_room_for_header() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
        assert_eq!(anchor_scroll_top(30.0), -50.0);
    }

    #[test]
    fn header_sticks_only_past_threshold() {
        assert!(!is_sticky(0.0));
        assert!(!is_sticky(100.0));
        assert!(is_sticky(100.5));
    }

    #[test]
    fn scroll_top_button_threshold() {
        assert!(!shows_scroll_top(300.0));
        assert!(shows_scroll_top(301.0));
    }
}
