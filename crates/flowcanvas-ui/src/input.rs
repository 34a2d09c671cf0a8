//! DOM event data extraction.
//!
//! Converts mouse, drag and touch events into engine coordinates. Screen
//! coordinates are `clientX/clientY`; canvas-local coordinates subtract the
//! canvas element's bounding rectangle and are not clamped, so a pan that
//! leaves the canvas still tracks the pointer.

use flowcanvas_core::{CanvasRect, Position};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, MouseEvent, TouchEvent, TouchList};

/// Screen-space rectangle of an element
#[must_use]
pub fn element_rect(element: &Element) -> CanvasRect {
    let rect = element.get_bounding_client_rect();
    CanvasRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Screen point of a mouse (or drag) event
#[must_use]
pub fn client_point(event: &MouseEvent) -> Position {
    Position::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Canvas-local point of a mouse event, with the canvas rectangle it was
/// measured against
#[must_use]
pub fn local_point(event: &MouseEvent, canvas: &Element) -> (Position, CanvasRect) {
    let rect = element_rect(canvas);
    (rect.to_local(client_point(event)), rect)
}

fn first_in(list: &TouchList) -> Option<Position> {
    list.get(0)
        .map(|touch| Position::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Screen point of the first active touch
#[must_use]
pub fn touch_point(event: &TouchEvent) -> Option<Position> {
    first_in(&event.touches())
}

/// Screen point of the touch that just ended
#[must_use]
pub fn released_touch_point(event: &TouchEvent) -> Option<Position> {
    first_in(&event.changed_touches())
}

/// True when the event fired on the listening element itself, not a child
#[must_use]
pub fn is_background(event: &Event) -> bool {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    }
}

/// Viewport width and whether the primary pointer is coarse (a finger)
#[must_use]
pub fn viewport_profile() -> (f64, bool) {
    let Some(window) = web_sys::window() else {
        return (f64::INFINITY, false);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY);
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    (width, coarse)
}
