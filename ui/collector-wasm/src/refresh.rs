//! Request dispatcher for the price refresh flows.
//!
//! One GET per click, spinner shown for the duration, spinner hidden on
//! both branches. In-flight requests are never cancelled: re-triggering
//! a refresh lets both complete and the binder applies last-write-wins.

use cc_api_types::{AddressValueResponse, ExchangeRateResponse, JsId};
use gloo_console::warn;

use crate::api;
use crate::binder;
use crate::dom::{self, Elements};
use crate::state;

/// Refresh a wallet's exchange rate from the backend.
pub async fn reload_currency_exchange(crypto_symbol: &str) {
    let symbol = crypto_symbol.to_lowercase();
    let spinner = dom::query(&format!(".wallet-{symbol} .exchange-rate-spinner"));
    let fiat = state::fiat_currency();

    if let Some(s) = &spinner {
        dom::show(s);
    }

    match api::get_json::<ExchangeRateResponse>(
        "/wallets/get_exchange_rate",
        &[("crypto", &symbol), ("fiat", &fiat)],
    )
    .await
    {
        Ok(data) => binder::update_wallet_exchange_rate(&symbol, &data),
        Err(err) => warn!("exchange rate refresh failed:", err.to_string()),
    }

    if let Some(s) = &spinner {
        dom::hide(s);
    }
}

/// Refresh one address's value and fiat value from the backend.
///
/// `standalone` marks a refresh that was not part of a batch, in which
/// case the page-level spinner is driven here as well. A failed call
/// leaves the previously displayed values untouched and dumps the raw
/// response body into the item's error region.
pub async fn reload_address_price(els: &Elements, js_id: &JsId, standalone: bool) {
    let container = dom::by_id(js_id.as_str());
    let spinner = container
        .as_ref()
        .and_then(|c| dom::query_within(c, ".price-spinner"));
    let fiat = state::fiat_currency();

    if let Some(s) = &spinner {
        dom::show(s);
    }
    if standalone {
        dom::show(&els.overall_spinner);
    }

    match api::get_json::<AddressValueResponse>(
        "/wallets/value",
        &[("js_id", js_id.as_str()), ("fiat", &fiat)],
    )
    .await
    {
        Ok(data) => binder::update_address_balance(js_id, &data),
        Err(err) => {
            if let Some(error_region) = container
                .as_ref()
                .and_then(|c| dom::query_within(c, ".error"))
            {
                dom::set_inner_html(&error_region, &format!("<pre>{}</pre>", err.error_text()));
            }
        }
    }

    if let Some(s) = &spinner {
        dom::hide(s);
    }
    if standalone {
        dom::hide(&els.overall_spinner);
    }
}
