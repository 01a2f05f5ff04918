//! Event binding.
//!
//! Wires every listener once at startup. Async handlers run through
//! `wasm_bindgen_futures::spawn_local`; in-flight requests are never
//! cancelled, so repeated clicks simply race and the binder's
//! last-write-wins semantics settle the outcome.

use cc_api_types::JsId;
use gloo_console::log;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::binder;
use crate::dom::{self, Elements};
use crate::keys;
use crate::refresh;
use crate::state;
use crate::transactions;

/// Attach a click handler to an element.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all listeners. Call once after `Elements::bind`.
pub fn bind_events(els: &Elements) {
    // ── Exchange-rate refresh ──
    for btn in dom::query_all(".reload-currency-exchange") {
        let els2 = els.clone();
        let symbol = btn
            .get_attribute("data-crypto-symbol")
            .unwrap_or_default()
            .to_lowercase();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            let els3 = els2.clone();
            let sym = symbol.clone();
            wasm_bindgen_futures::spawn_local(async move {
                refresh::reload_currency_exchange(&sym).await;
                binder::update_overall_fiat_total(&els3);
            });
        });
    }

    // ── Address price refresh ──
    for btn in dom::query_all(".reload-address-price") {
        let els2 = els.clone();
        let js_id = btn.get_attribute("data-js-id").unwrap_or_default();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let els3 = els2.clone();
            let id = JsId(js_id.clone());
            wasm_bindgen_futures::spawn_local(async move {
                refresh::reload_address_price(&els3, &id, true).await;
                binder::update_overall_fiat_total(&els3);
            });
        });
    }

    // ── Transactions ──
    for btn in dom::query_all(".show-transactions") {
        let trigger = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let t = trigger.clone();
            wasm_bindgen_futures::spawn_local(async move {
                transactions::show_transactions(&t).await;
            });
            // Swap to the hide button immediately, as the page did.
            dom::hide(&trigger);
            if let Some(hide_btn) = dom::prev_el(&trigger) {
                dom::show(&hide_btn);
            }
        });
    }

    for btn in dom::query_all(".hide-transactions") {
        let trigger = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            transactions::hide_transactions(&trigger);
        });
    }

    // ── Wallet fold ──
    for section in dom::query_all(".wallet-top-section") {
        let sec = section.clone();
        on_click!(section, move |_: web_sys::MouseEvent| {
            if let Some(parent) = sec.parent_element() {
                if let Some(container) = dom::query_within(&parent, ".addresses-container") {
                    dom::toggle(&container);
                }
            }
            if let Some(el) = dom::query_within(&sec, ".hide-addresses") {
                dom::toggle(&el);
            }
            if let Some(el) = dom::query_within(&sec, ".show-addresses") {
                dom::toggle(&el);
            }
        });
    }

    // ── Key modals ──
    for btn in dom::query_all(".launch-public-qr-modal") {
        if let Some(modal) = dom::prev_el(&btn) {
            bind_backdrop_close(&modal);
        }
        let trigger = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            keys::open_public_qr_modal(&trigger);
        });
    }

    for btn in dom::query_all(".launch-private-qr-modal") {
        if let Some(modal) = dom::prev_el(&btn) {
            bind_backdrop_close(&modal);
        }
        let trigger = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let t = trigger.clone();
            wasm_bindgen_futures::spawn_local(async move {
                keys::reveal_private_key(&t).await;
            });
        });
    }

    // ── New wallet modal ──
    if let Some(btn) = dom::by_id("new-wallet") {
        if let Some(modal) = dom::by_id("new-wallet-modal") {
            bind_backdrop_close(&modal);
            let m = modal.clone();
            on_click!(btn, move |_: web_sys::MouseEvent| {
                dom::show(&m);
            });
        }
    }

    // ── Fiat currency selector ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let fiat = dom::get_select_value(&els2.fiat_selector);
            state::persist_fiat_currency(&fiat);
            state::set_fiat_currency(&fiat);
            log!("change fiat selector", fiat);
            let _ = dom::window().location().reload();
        }) as Box<dyn FnMut(_)>);
        els.fiat_selector
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Close a modal when the backdrop itself (not its contents) is clicked.
fn bind_backdrop_close(modal: &Element) {
    let m = modal.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
        if target.as_ref() == Some(&m) {
            dom::hide(&m);
        }
    }) as Box<dyn FnMut(_)>);
    modal
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
