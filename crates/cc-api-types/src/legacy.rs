//! Payloads of the legacy `/wallet/*` endpoints.
//!
//! The legacy backend returns the derived fiat value itself, where the
//! current one returns only the crypto value and leaves the fiat
//! computation to the client.

use serde::{Deserialize, Serialize};

/// Response of `GET /wallet/value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletValueResponse {
    pub fiat_exchange: f64,
    pub wallet_value: f64,
    pub fiat_value: f64,
}

/// One entry of the `GET /wallet/transactions` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub time_utc: String,
    pub amount: f64,
    pub tx: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_value_decodes() {
        let raw = r#"{"fiat_exchange": 234.5, "wallet_value": 10.0, "fiat_value": 2345.0}"#;
        let resp: WalletValueResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.fiat_exchange, 234.5);
        assert_eq!(resp.fiat_value, 2345.0);
    }

    #[test]
    fn transaction_decodes() {
        let raw = r#"[{"time_utc": "2017-06-01 10:00:00", "amount": 1.25, "tx": "abc123"}]"#;
        let txs: Vec<TransactionRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].tx, "abc123");
    }
}
