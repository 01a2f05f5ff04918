//! CryptoCollector wallet front end.
//!
//! Formats balances, rates and transactions fetched from the wallet
//! backend into existing page markup. Everything is driven by explicit
//! user clicks; there is no polling and no retry.

pub mod api;
pub mod binder;
pub mod dom;
pub mod events;
pub mod keys;
pub mod refresh;
pub mod state;
pub mod transactions;

use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restore the display currency before anything renders.
    let fiat = state::load_fiat_currency();
    state::set_fiat_currency(&fiat);
    dom::set_select_value(&els.fiat_selector, &fiat);
    for el in dom::query_all(".fiat-symbol") {
        dom::set_text(&el, &fiat.to_uppercase());
    }

    events::bind_events(&els);

    Ok(())
}
