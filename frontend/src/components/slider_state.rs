//! Pointer math for the before/after comparison slider.
//!
//! `SliderState` holds the reveal percentage and whether a drag session is
//! active. It knows nothing about the DOM: the component feeds it the
//! container's bounds and a `PointerSample` extracted from the browser event,
//! then paints whatever `reveal_percent` ends up being.

use web_sys::{MouseEvent, TouchEvent};

use crate::config::DEFAULT_REVEAL_PERCENT;

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

/// Pins `percent` into `[0, 100]`. NaN pins to 0.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return MIN_PERCENT;
    }
    percent.clamp(MIN_PERCENT, MAX_PERCENT)
}

/// Horizontal extent of the slider container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// Horizontal pointer position pulled out of a mouse or touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Mouse { client_x: f64 },
    // A touch event without touch points (e.g. touchend) carries no position.
    Touch { client_x: Option<f64> },
}

impl PointerSample {
    pub fn from_mouse(event: &MouseEvent) -> Self {
        PointerSample::Mouse { client_x: event.client_x() as f64 }
    }

    pub fn from_touch(event: &TouchEvent) -> Self {
        PointerSample::Touch {
            client_x: event.touches().get(0).map(|touch| touch.client_x() as f64),
        }
    }

    pub fn client_x(&self) -> Option<f64> {
        match *self {
            PointerSample::Mouse { client_x } => Some(client_x),
            PointerSample::Touch { client_x } => client_x,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    reveal_percent: f64,
    dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            reveal_percent: DEFAULT_REVEAL_PERCENT,
            dragging: false,
        }
    }
}

impl SliderState {
    pub fn reveal_percent(&self) -> f64 {
        self.reveal_percent
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Offset of the handle from the container's left edge, in percent.
    pub fn handle_offset(&self) -> f64 {
        self.reveal_percent
    }

    /// Width of the after-image layer, in percent.
    pub fn after_width(&self) -> f64 {
        self.reveal_percent
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Moves the reveal to follow the pointer. Returns true when the reveal
    /// percentage was written, so the caller knows to repaint.
    pub fn update_drag(&mut self, sample: PointerSample, bounds: Bounds) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(client_x) = sample.client_x() else {
            return false;
        };
        if bounds.width <= 0.0 {
            return false;
        }
        let raw = (client_x - bounds.left) / bounds.width * 100.0;
        self.set_reveal(raw);
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn set_reveal(&mut self, percent: f64) {
        self.reveal_percent = clamp_percent(percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Bounds = Bounds { left: 0.0, width: 200.0 };

    fn dragging() -> SliderState {
        let mut state = SliderState::default();
        state.begin_drag();
        state
    }

    #[test]
    fn clamp_pins_to_range() {
        for x in [-1e9, -10.0, -0.0001, 100.0001, 250.0, f64::INFINITY, f64::NEG_INFINITY] {
            let c = clamp_percent(x);
            assert!((MIN_PERCENT..=MAX_PERCENT).contains(&c), "{x} -> {c}");
        }
        assert_eq!(clamp_percent(-10.0), 0.0);
        assert_eq!(clamp_percent(250.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }

    #[test]
    fn clamp_is_identity_inside_range() {
        for x in [0.0, 0.5, 25.0, 50.0, 99.99, 100.0] {
            assert_eq!(clamp_percent(x), x);
        }
    }

    #[test]
    fn starts_at_half_and_idle() {
        let state = SliderState::default();
        assert_eq!(state.reveal_percent(), 50.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn set_reveal_keeps_handle_and_layer_aligned() {
        let mut state = SliderState::default();
        state.set_reveal(50.0);
        assert_eq!(state.handle_offset(), 50.0);
        assert_eq!(state.after_width(), 50.0);

        state.set_reveal(140.0);
        assert_eq!(state.handle_offset(), 100.0);
        assert_eq!(state.after_width(), 100.0);
    }

    #[test]
    fn drag_maps_pointer_to_percent() {
        let mut state = dragging();
        assert!(state.update_drag(PointerSample::Mouse { client_x: 50.0 }, WIDE));
        assert_eq!(state.reveal_percent(), 25.0);
    }

    #[test]
    fn drag_is_relative_to_container_left_edge() {
        let mut state = dragging();
        let bounds = Bounds { left: 100.0, width: 400.0 };
        state.update_drag(PointerSample::Mouse { client_x: 400.0 }, bounds);
        assert_eq!(state.reveal_percent(), 75.0);
    }

    #[test]
    fn pointer_left_of_container_clamps_to_zero() {
        let mut state = dragging();
        state.update_drag(PointerSample::Mouse { client_x: -10.0 }, WIDE);
        assert_eq!(state.reveal_percent(), 0.0);
    }

    #[test]
    fn pointer_right_of_container_clamps_to_hundred() {
        let mut state = dragging();
        state.update_drag(PointerSample::Mouse { client_x: 900.0 }, WIDE);
        assert_eq!(state.reveal_percent(), 100.0);
    }

    #[test]
    fn update_without_session_is_ignored() {
        let mut state = dragging();
        state.update_drag(PointerSample::Mouse { client_x: 150.0 }, WIDE);
        state.end_drag();

        assert!(!state.update_drag(PointerSample::Mouse { client_x: 20.0 }, WIDE));
        assert_eq!(state.reveal_percent(), 75.0);
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut state = SliderState::default();
        state.end_drag();
        state.end_drag();
        assert!(!state.is_dragging());
        assert_eq!(state.reveal_percent(), 50.0);
    }

    #[test]
    fn touch_at_right_edge_reveals_everything() {
        let mut state = dragging();
        state.update_drag(PointerSample::Touch { client_x: Some(200.0) }, WIDE);
        assert_eq!(state.reveal_percent(), 100.0);
    }

    #[test]
    fn touch_without_points_is_ignored() {
        let mut state = dragging();
        assert!(!state.update_drag(PointerSample::Touch { client_x: None }, WIDE));
        assert_eq!(state.reveal_percent(), 50.0);
    }

    #[test]
    fn zero_width_container_does_not_move() {
        let mut state = dragging();
        let collapsed = Bounds { left: 0.0, width: 0.0 };
        assert!(!state.update_drag(PointerSample::Mouse { client_x: 10.0 }, collapsed));
        assert_eq!(state.reveal_percent(), 50.0);
    }

    #[test]
    fn mouse_and_touch_agree() {
        let mut mouse = dragging();
        let mut touch = dragging();
        mouse.update_drag(PointerSample::Mouse { client_x: 133.0 }, WIDE);
        touch.update_drag(PointerSample::Touch { client_x: Some(133.0) }, WIDE);
        assert_eq!(mouse.reveal_percent(), touch.reveal_percent());
    }
}
