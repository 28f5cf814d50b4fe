//! Canvas input mapping and surface sizing helpers.

#[cfg(feature = "hydrate")]
use canvas::input::Button as CanvasButton;
#[cfg(feature = "hydrate")]
use canvas::surface::{Point as CanvasPoint, SurfaceConfig};

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn pointer_button(ev: &leptos::ev::PointerEvent) -> CanvasButton {
    CanvasButton::from_dom(ev.button())
}

/// Surface sized from the window viewport, plus the device pixel ratio.
#[cfg(feature = "hydrate")]
pub fn surface_for_window() -> (SurfaceConfig, f64) {
    let Some(window) = web_sys::window() else {
        return (SurfaceConfig::default(), 1.0);
    };
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let width = dimension(window.inner_width());
    let height = dimension(window.inner_height());
    (SurfaceConfig::for_viewport(width, height), window.device_pixel_ratio())
}
