//! DOM lookup and mutation helpers.
//!
//! Page-level chrome is resolved once at startup into `Elements`.
//! Per-wallet and per-address fields are located structurally at call
//! time (`.wallet-{symbol}` containers, `#{js_id}` subtrees); a missing
//! field is a silent no-op.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

// ── Lookup ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = document().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn next_el(el: &Element) -> Option<Element> {
    el.next_element_sibling()
}

pub fn prev_el(el: &Element) -> Option<Element> {
    el.previous_element_sibling()
}

// ── Mutation ──

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

/// Restore the element's stylesheet display (jQuery `show()`).
pub fn show(el: &Element) {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        let _ = h.style().remove_property("display");
    }
}

/// Hide via inline `display: none` (jQuery `hide()`).
pub fn hide(el: &Element) {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        let _ = h.style().set_property("display", "none");
    }
}

pub fn is_hidden(el: &Element) -> bool {
    window()
        .get_computed_style(el)
        .ok()
        .flatten()
        .map(|s| s.get_property_value("display").unwrap_or_default() == "none")
        .unwrap_or(false)
}

pub fn toggle(el: &Element) {
    if is_hidden(el) {
        show(el);
    } else {
        hide(el);
    }
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

// ── Elements struct ──

/// Page-level chrome used by every refresh flow.
#[derive(Clone)]
pub struct Elements {
    pub overall_spinner: Element,
    pub total_fiat_amount: Element,
    pub failures_banner: Element,
    pub fiat_selector: HtmlSelectElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all page-level references. Call once at startup.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            overall_spinner: get_el!("overall-spinner"),
            total_fiat_amount: get_el!("total-fiat-amount"),
            failures_banner: get_el!("failures-detected"),
            fiat_selector: get_select!("fiat-currency-selector"),
        })
    }
}
