//! Small DOM helpers shared by the platform and metrics code

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Look up a required element by id
pub fn html_element(doc: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

/// Create a `<div>` with the given classes
pub fn create_div(doc: &Document, classes: &[&str]) -> Result<HtmlElement, JsValue> {
    let el = doc.create_element("div")?.dyn_into::<HtmlElement>()?;
    for class in classes {
        el.class_list().add_1(class)?;
    }
    Ok(el)
}

/// Per-frame style write; a failed write is not worth stopping the loop for
pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn set_px(el: &HtmlElement, prop: &str, px: f32) {
    set_style(el, prop, &px_value(px));
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    set_style(el, "display", if visible { "block" } else { "none" });
}

pub fn px_value(px: f32) -> String {
    format!("{}px", px)
}

/// Number of ground tiles needed to cover `width`
pub fn ground_tile_count(width: f32, tile: f32) -> u32 {
    if tile <= 0.0 {
        return 0;
    }
    (width / tile).ceil().max(0.0) as u32
}
