//! Rendering for the legacy wallet page.
//!
//! This variant receives the derived fiat value from the backend and
//! renders transaction ids as a flat list. It deliberately shares no
//! rendering code with the collector page.

use cc_api_types::legacy::{TransactionRecord, WalletValueResponse};
use cc_format as fmt;
use web_sys::Element;

use crate::dom::{self, Elements};

/// Write a refreshed wallet value, exchange rate and fiat value.
pub fn update_wallet_price(wallet_id: &str, data: &WalletValueResponse) {
    let Some(wallet) = dom::by_id(wallet_id) else {
        return;
    };

    if let Some(el) = dom::query_within(&wallet, ".wallet-value") {
        dom::set_text(&el, &fmt::format_overall(data.wallet_value));
    }
    if let Some(el) = dom::query_within(&wallet, ".fiat-exchange") {
        dom::set_text(&el, &fmt::legacy::format_exchange(data.fiat_exchange));
    }
    if let Some(el) = dom::query_within(&wallet, ".fiat-value") {
        dom::set_text(&el, &format!("{:.2}", data.fiat_value));
    }
}

/// Recompute the page total from every rendered `.fiat-value` cell.
///
/// Cells are written without separators here, so they are summed as-is.
pub fn update_overall_fiat_total(els: &Elements) {
    let cells = dom::query_all(".fiat-value");
    let total: f64 = cells.iter().map(|el| fmt::parse_rendered(&dom::text(el))).sum();
    dom::set_text(&els.total_fiat_amount, &fmt::format_overall(total));
}

/// Markup appended to the transaction container: one tx id per line.
pub fn transactions_html(transactions: &[TransactionRecord]) -> String {
    let mut html = String::new();
    for tx in transactions {
        html.push_str(&tx.tx);
        html.push_str("<br>");
    }
    html
}

pub fn append_transactions(container: &Element, transactions: &[TransactionRecord]) {
    let _ = container.insert_adjacent_html("beforeend", &transactions_html(transactions));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_list_is_one_id_per_line() {
        let txs = vec![
            TransactionRecord {
                time_utc: "2017-06-01 10:00:00".into(),
                amount: 1.0,
                tx: "aaa".into(),
            },
            TransactionRecord {
                time_utc: "2017-06-02 10:00:00".into(),
                amount: -0.5,
                tx: "bbb".into(),
            },
        ];
        assert_eq!(transactions_html(&txs), "aaa<br>bbb<br>");
        assert_eq!(transactions_html(&[]), "");
    }
}
