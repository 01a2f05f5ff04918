//! DOM binder: writes formatted payloads into the page.
//!
//! All writes are last-write-wins with no diffing. Missing fields are
//! silent no-ops; concurrent refreshes self-correct on the next
//! aggregate recomputation because totals are always recomputed from
//! what is currently rendered, never accumulated.

use cc_api_types::{AddressValueResponse, ExchangeRateResponse, JsId};
use cc_format as fmt;
use gloo_console::log;

use crate::dom::{self, Elements};

const PRICE_FAIL_STATUS: &str =
    "<span class='price-fail'>&#9888; Price service not available</span>";
const PRICE_FAIL_MARK: &str = "<span class='price-fail'>&#9888;</span>";

/// Write a refreshed address value and its derived fiat value, then
/// recompute the owning wallet's totals.
pub fn update_address_balance(js_id: &JsId, data: &AddressValueResponse) {
    let symbol = data.crypto_symbol.to_lowercase();

    let rate_text = dom::query(&format!(".wallet-{symbol} .fiat-exchange-rate"))
        .map(|el| dom::text(&el))
        .unwrap_or_default();
    let rate = fmt::parse_rendered(&fmt::clean_number(&rate_text));

    let fiat_value = fmt::format_fiat(rate * data.wallet_value);
    let wallet_value = fmt::group_thousands(&data.wallet_value.to_string());

    if let Some(el) = dom::query(&format!("#{} .address-value", js_id)) {
        dom::set_text(&el, &wallet_value);
    }
    if let Some(el) = dom::query(&format!("#{} .address-fiat-value", js_id)) {
        dom::set_text(&el, &fiat_value);
    }

    update_wallet_total(&symbol);
}

/// Sum a wallet's address balances into its crypto and fiat totals.
pub fn update_wallet_total(crypto_symbol: &str) {
    let symbol = crypto_symbol.to_lowercase();
    let Some(wallet) = dom::query(&format!(".wallet-{symbol}")) else {
        return;
    };

    let addresses = dom::query_all_within(&wallet, ".address-value");
    let wallet_total = fmt::sum_rendered(addresses.iter().map(dom::text));

    if let Some(el) = dom::query_within(&wallet, ".wallet-total-crypto") {
        dom::set_text(&el, &fmt::format_crypto(wallet_total));
    }

    let rate_text = dom::query_within(&wallet, ".fiat-exchange-rate")
        .map(|el| dom::text(&el))
        .unwrap_or_default();
    let rate = fmt::parse_rendered(&fmt::clean_number(&rate_text));

    if let Some(el) = dom::query_within(&wallet, ".wallet-total-fiat") {
        dom::set_text(&el, &fmt::format_fiat(rate * wallet_total));
    }
}

/// Apply an exchange-rate response to the wallet header.
///
/// Rate 0 means the price service is unavailable: the rate field is
/// hidden and the `price-fail` marker injected, which the aggregate
/// pass picks up for the page banner.
pub fn update_wallet_exchange_rate(crypto_symbol: &str, data: &ExchangeRateResponse) {
    let symbol = crypto_symbol.to_lowercase();
    let Some(wallet) = dom::query(&format!(".wallet-{symbol}")) else {
        return;
    };

    if data.is_unavailable() {
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-status") {
            dom::set_inner_html(&el, PRICE_FAIL_STATUS);
        }
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-units") {
            dom::hide(&el);
        }
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-rate") {
            dom::set_text(&el, "0");
            dom::hide(&el);
        }
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-small-status") {
            dom::set_inner_html(&el, PRICE_FAIL_MARK);
        }
    } else {
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-source") {
            dom::set_text(&el, &format!("(via {})", data.price_source));
        }
        if let Some(el) = dom::query_within(&wallet, ".fiat-exchange-rate") {
            dom::set_text(&el, &data.exchange_rate.to_string());
        }
    }
}

/// Recompute the page-wide fiat total from every rendered wallet total.
///
/// Scans the DOM at the moment of invocation, so refreshes completing
/// out of order converge on the next call.
pub fn update_overall_fiat_total(els: &Elements) {
    let cells = dom::query_all(".wallet-total-fiat");
    let total = fmt::sum_rendered(cells.iter().map(dom::text));

    let with_commas = fmt::format_overall(total);
    dom::document().set_title(&format!("{with_commas} - CryptoCollector"));
    dom::set_text(&els.total_fiat_amount, &with_commas);

    if !dom::query_all(".price-fail").is_empty() {
        dom::show(&els.failures_banner);
    }
    log!("updated overall totals");
}
