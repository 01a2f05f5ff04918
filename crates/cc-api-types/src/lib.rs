//! Wire models for the wallet backends.
//!
//! Two endpoint families exist: the current collector endpoints
//! (`/wallets/*`) and the legacy ones (`/wallet/*`). Their payload
//! shapes diverge, so the legacy models live in their own module rather
//! than being folded into a shared abstraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod legacy;

/// Client-side identifier correlating a DOM subtree to a wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsId(pub String);

impl JsId {
    /// Build the `{symbol}-{wallet_id}` identifier used by wallet rows.
    pub fn for_wallet(crypto_symbol: &str, wallet_id: &str) -> Self {
        Self(format!("{}-{}", crypto_symbol.to_lowercase(), wallet_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response of `GET /wallets/get_exchange_rate`.
///
/// A rate of 0 is the backend's "price service unavailable" sentinel,
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    pub exchange_rate: f64,
    #[serde(default)]
    pub price_source: String,
}

impl ExchangeRateResponse {
    pub fn is_unavailable(&self) -> bool {
        self.exchange_rate == 0.0
    }
}

/// Response of `GET /wallets/value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressValueResponse {
    pub crypto_symbol: String,
    pub wallet_value: f64,
}

/// The `[price, source, date]` triple attached to a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice(pub f64, pub String, pub String);

impl HistoricalPrice {
    pub fn price(&self) -> f64 {
        self.0
    }

    pub fn source(&self) -> &str {
        &self.1
    }

    pub fn date(&self) -> &str {
        &self.2
    }
}

/// One entry of the `GET /wallets/transactions` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub amount: f64,
    pub txid: String,
    pub fiat_symbol: String,
    pub historical_price: HistoricalPrice,
}

/// Failure of a backend call.
///
/// `error_text` is what gets dumped, verbatim, into the inline error
/// region next to whichever element triggered the request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn error_text(&self) -> &str {
        match self {
            ApiError::Http { body, .. } => body,
            ApiError::Network(msg) => msg,
            ApiError::Decode(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_id_follows_symbol_dash_id_convention() {
        let id = JsId::for_wallet("BTC", "42");
        assert_eq!(id.as_str(), "btc-42");
        assert_eq!(id.to_string(), "btc-42");
    }

    #[test]
    fn exchange_rate_zero_is_unavailable() {
        let resp: ExchangeRateResponse =
            serde_json::from_str(r#"{"exchange_rate": 0}"#).unwrap();
        assert!(resp.is_unavailable());
        assert_eq!(resp.price_source, "");

        let resp: ExchangeRateResponse =
            serde_json::from_str(r#"{"exchange_rate": 6543.21, "price_source": "coindesk"}"#)
                .unwrap();
        assert!(!resp.is_unavailable());
        assert_eq!(resp.price_source, "coindesk");
    }

    #[test]
    fn address_value_decodes() {
        let resp: AddressValueResponse =
            serde_json::from_str(r#"{"crypto_symbol": "BTC", "wallet_value": 1.5}"#).unwrap();
        assert_eq!(resp.crypto_symbol, "BTC");
        assert_eq!(resp.wallet_value, 1.5);
    }

    #[test]
    fn historical_price_decodes_from_wire_triple() {
        let raw = r#"
        {
          "date": "2017-12-01T10:00:00Z",
          "amount": -0.25,
          "txid": "deadbeef",
          "fiat_symbol": "usd",
          "historical_price": [10250.0, "gdax", "2017-12-01T10:00:00Z"]
        }"#;
        let tx: TransactionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.historical_price.price(), 10250.0);
        assert_eq!(tx.historical_price.source(), "gdax");
        assert_eq!(tx.historical_price.date(), "2017-12-01T10:00:00Z");
        assert!(tx.amount < 0.0);
    }

    #[test]
    fn http_error_text_is_the_raw_body() {
        let err = ApiError::Http {
            status: 500,
            body: "Traceback (most recent call last): ...".into(),
        };
        assert_eq!(err.error_text(), "Traceback (most recent call last): ...");
    }
}
