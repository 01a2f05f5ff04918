//! Transaction table: fetch, render, toggle.
//!
//! Row content is prepared into `TxRowView` and rendered by a pure
//! function so the markup can be tested without a browser; only the
//! date formatting goes through the host's `Date`.

use cc_api_types::{JsId, TransactionRecord};
use cc_format as fmt;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::api;
use crate::dom;
use crate::state;

/// Everything one rendered transaction row needs, already formatted.
pub struct TxRowView {
    pub cardinal: usize,
    pub date: String,
    pub time_ago: String,
    pub verb: &'static str,
    pub amount: String,
    pub crypto_symbol: String,
    pub fiat_symbol: String,
    pub historical_value: String,
    pub source: String,
    pub historical_date: String,
    pub explorer_url: String,
}

/// Block-explorer link for a transaction id.
pub fn explorer_url(crypto_symbol: &str, txid: &str) -> String {
    match crypto_symbol.to_lowercase().as_str() {
        "btc" => format!("https://blockchair.com/bitcoin/transaction/{txid}"),
        "ltc" => format!("https://blockchair.com/litecoin/transaction/{txid}"),
        "doge" => format!("https://blockchair.com/dogecoin/transaction/{txid}"),
        "eth" => format!("https://etherscan.io/tx/{txid}"),
        _ => format!("https://blockchair.com/search?q={txid}"),
    }
}

/// Prepare a row view from a record plus the host-formatted dates.
pub fn build_row_view(
    tx: &TransactionRecord,
    cardinal: usize,
    crypto_symbol: &str,
    date: String,
    time_ago: String,
    historical_date: String,
) -> TxRowView {
    let abs_amount = tx.amount.abs();
    let verb = if tx.amount < 0.0 { "Sent" } else { "Received" };
    let h_price = tx.historical_price.price();

    TxRowView {
        cardinal,
        date,
        time_ago,
        verb,
        amount: fmt::format_amount(abs_amount),
        crypto_symbol: crypto_symbol.to_uppercase(),
        fiat_symbol: tx.fiat_symbol.to_uppercase(),
        historical_value: fmt::group_thousands(&format!("{:.2}", h_price * abs_amount)),
        source: format!("{}: {}", tx.historical_price.source(), h_price),
        historical_date,
        explorer_url: explorer_url(crypto_symbol, &tx.txid),
    }
}

/// Render one table row. The caller places it in the DOM.
pub fn render_row(view: &TxRowView) -> String {
    format!(
        "<tr class='transaction'>\
            <td>{cardinal}</td>\
            <td class='date'>\
                <span class='date'>{date}</span>\
                <span class='time-ago'> ({ago} ago)</span>\
            </td>\
            <td class='verb {verb}'>{verb}</td>\
            <td class='amount'>{amount} {crypto}</td>\
            <td class='historical-price' title='{source} {fiat}/{crypto} at {h_date}'>{h_value} {fiat}</td>\
            <td class='external-link'><a target='_blank' href='{url}'>BE</a></td>\
        </tr>",
        cardinal = view.cardinal,
        date = view.date,
        ago = view.time_ago,
        verb = view.verb,
        amount = view.amount,
        crypto = view.crypto_symbol,
        source = view.source,
        fiat = view.fiat_symbol,
        h_date = view.historical_date,
        h_value = view.historical_value,
        url = view.explorer_url,
    )
}

fn host_date_string(raw: &str) -> (String, f64) {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    let formatted = String::from(date.to_date_string());
    (formatted, date.get_time())
}

/// Fetch and render a wallet's transactions into the container that
/// follows the trigger's spinner.
pub async fn show_transactions(trigger: &Element) {
    let wallet_id = trigger.get_attribute("data-wallet-id").unwrap_or_default();
    let crypto_symbol = trigger
        .get_attribute("data-crypto-symbol")
        .unwrap_or_default();
    let js_id = JsId::for_wallet(&crypto_symbol, &wallet_id);
    let fiat = state::fiat_currency();

    let spinner = dom::next_el(trigger);
    let container = spinner.as_ref().and_then(dom::next_el);

    if let Some(s) = &spinner {
        dom::show(s);
    }

    match api::get_json::<Vec<TransactionRecord>>(
        "/wallets/transactions",
        &[("js_id", js_id.as_str()), ("fiat", &fiat)],
    )
    .await
    {
        Ok(mut transactions) => {
            if let Some(c) = &container {
                for row in dom::query_all_within(c, "tr") {
                    row.remove();
                }
                transactions.reverse();
                let mut html = String::new();
                for (i, tx) in transactions.iter().enumerate() {
                    let (date, timestamp_ms) = host_date_string(&tx.date);
                    let elapsed_secs = (js_sys::Date::now() - timestamp_ms) / 1000.0;
                    let (historical_date, _) = host_date_string(tx.historical_price.date());
                    let view = build_row_view(
                        tx,
                        i + 1,
                        &crypto_symbol,
                        date,
                        fmt::time_since(elapsed_secs),
                        historical_date,
                    );
                    html.push_str(&render_row(&view));
                }
                let _ = c.insert_adjacent_html("beforeend", &html);
            }
        }
        Err(err) => {
            if let Some(c) = &container {
                dom::set_inner_html(
                    c,
                    &format!("<tr><td><pre>{}</pre></td></tr>", err.error_text()),
                );
            }
        }
    }

    if let Some(s) = &spinner {
        dom::hide(s);
    }
}

/// Clear the transaction table and restore the show/hide buttons.
///
/// The trigger is the hide button; its next siblings are the show
/// button, the spinner, and the row container.
pub fn hide_transactions(trigger: &Element) {
    let show_btn = dom::next_el(trigger);
    let container = show_btn
        .as_ref()
        .and_then(dom::next_el)
        .as_ref()
        .and_then(dom::next_el);

    if let Some(c) = &container {
        for row in dom::query_all_within(c, "tr") {
            row.remove();
        }
    }
    if let Some(b) = &show_btn {
        dom::show(b);
    }
    dom::hide(trigger);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_api_types::HistoricalPrice;

    fn sample_tx(amount: f64) -> TransactionRecord {
        TransactionRecord {
            date: "2017-12-01T10:00:00Z".into(),
            amount,
            txid: "deadbeef".into(),
            fiat_symbol: "usd".into(),
            historical_price: HistoricalPrice(10250.0, "gdax".into(), "2017-12-01T10:00:00Z".into()),
        }
    }

    #[test]
    fn sent_and_received_follow_amount_sign() {
        let view = build_row_view(
            &sample_tx(-0.25),
            1,
            "btc",
            "Fri Dec 01 2017".into(),
            "25 hours".into(),
            "Fri Dec 01 2017".into(),
        );
        assert_eq!(view.verb, "Sent");
        assert_eq!(view.amount, "0.2500");
        assert_eq!(view.historical_value, "2,562.50");

        let view = build_row_view(
            &sample_tx(0.25),
            2,
            "btc",
            "Fri Dec 01 2017".into(),
            "25 hours".into(),
            "Fri Dec 01 2017".into(),
        );
        assert_eq!(view.verb, "Received");
    }

    #[test]
    fn row_markup_carries_the_formatted_fields() {
        let view = build_row_view(
            &sample_tx(-0.25),
            3,
            "btc",
            "Fri Dec 01 2017".into(),
            "25 hours".into(),
            "Fri Dec 01 2017".into(),
        );
        let html = render_row(&view);
        assert!(html.starts_with("<tr class='transaction'><td>3</td>"));
        assert!(html.contains("<td class='verb Sent'>Sent</td>"));
        assert!(html.contains("0.2500 BTC"));
        assert!(html.contains("2,562.50 USD"));
        assert!(html.contains("title='gdax: 10250 USD/BTC at Fri Dec 01 2017'"));
        assert!(html.contains("href='https://blockchair.com/bitcoin/transaction/deadbeef'"));
        assert!(html.contains("(25 hours ago)"));
    }

    #[test]
    fn explorer_links_cover_known_chains() {
        assert_eq!(
            explorer_url("BTC", "ab"),
            "https://blockchair.com/bitcoin/transaction/ab"
        );
        assert_eq!(explorer_url("eth", "cd"), "https://etherscan.io/tx/cd");
        assert_eq!(
            explorer_url("xyz", "ef"),
            "https://blockchair.com/search?q=ef"
        );
    }
}
