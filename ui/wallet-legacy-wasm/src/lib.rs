//! Legacy wallet front end.
//!
//! The older of the two wallet pages: per-wallet price refresh against
//! the `/wallet/*` endpoints and a bare transaction-id list. Kept as
//! its own module rather than merged with the collector page; the two
//! diverge in endpoints and payload shapes.

pub mod api;
pub mod dom;
pub mod view;

use cc_api_types::legacy::{TransactionRecord, WalletValueResponse};
use gloo_console::log;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::Elements;

macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let els = Elements::bind()?;
    bind_events(&els);

    Ok(())
}

fn bind_events(els: &Elements) {
    for btn in dom::query_all(".reload-wallet-price") {
        let els2 = els.clone();
        let wallet_id = btn.get_attribute("data-wallet-id").unwrap_or_default();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let els3 = els2.clone();
            let id = wallet_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                reload_wallet_price(&els3, &id).await;
            });
        });
    }

    for btn in dom::query_all(".show-transactions") {
        let trigger = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let t = trigger.clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_transactions(&t).await;
            });
        });
    }

    if let Some(btn) = dom::by_id("new-wallet") {
        if let Some(modal) = dom::by_id("new-wallet-modal") {
            let m = modal.clone();
            on_click!(btn, move |_: web_sys::MouseEvent| {
                dom::show(&m);
            });
        }
    }
}

/// Refresh one wallet's price and recompute the page total.
async fn reload_wallet_price(els: &Elements, wallet_id: &str) {
    let wallet = dom::by_id(wallet_id);
    let spinner = wallet
        .as_ref()
        .and_then(|w| dom::query_within(w, ".price-spinner"));

    if let Some(s) = &spinner {
        dom::show(s);
    }
    dom::show(&els.overall_spinner);

    match api::get_json::<WalletValueResponse>("/wallet/value", &[("js_id", wallet_id)]).await {
        Ok(data) => {
            view::update_wallet_price(wallet_id, &data);
            view::update_overall_fiat_total(els);
        }
        Err(err) => {
            if let Some(error_region) = wallet
                .as_ref()
                .and_then(|w| dom::query_within(w, ".error"))
            {
                dom::set_inner_html(
                    &error_region,
                    &format!("oh snap!! error!! {}", err.error_text()),
                );
            }
        }
    }

    if let Some(s) = &spinner {
        dom::hide(s);
    }
    dom::hide(&els.overall_spinner);
}

/// Fetch a wallet's transactions and append their ids to the container
/// that follows the trigger's spinner.
async fn show_transactions(trigger: &Element) {
    let wallet_id = trigger.get_attribute("data-wallet-id").unwrap_or_default();
    let spinner = dom::next_el(trigger);
    let container = spinner.as_ref().and_then(dom::next_el);

    if let Some(s) = &spinner {
        dom::show(s);
    }

    match api::get_json::<Vec<TransactionRecord>>("/wallet/transactions", &[("js_id", &wallet_id)])
        .await
    {
        Ok(transactions) => {
            log!("loaded transactions:", transactions.len());
            if let Some(c) = &container {
                view::append_transactions(c, &transactions);
            }
        }
        Err(err) => {
            if let Some(c) = &container {
                dom::set_inner_html(c, &format!("oh snap!! error!! {}", err.error_text()));
            }
        }
    }

    if let Some(s) = &spinner {
        dom::hide(s);
    }
}
