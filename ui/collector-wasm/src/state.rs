//! Application state.
//!
//! The selected fiat currency lives here instead of in module-level
//! globals; it is seeded from localStorage at startup and read by every
//! dispatcher call.

use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;

/// localStorage key for the persisted display currency.
pub const FIAT_CURRENCY_KEY: &str = "fiat-currency-selector";

const DEFAULT_FIAT: &str = "usd";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub fiat_currency: String,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn fiat_currency() -> String {
    with(|s| s.fiat_currency.clone())
}

pub fn set_fiat_currency(code: &str) {
    with_mut(|s| s.fiat_currency = code.to_string());
}

// ── localStorage ──

fn local_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok()?
}

fn local_set(key: &str, value: &str) {
    let _ = LocalStorage::raw().set_item(key, value);
}

/// Read the persisted currency, writing the default back on first visit.
pub fn load_fiat_currency() -> String {
    match local_get(FIAT_CURRENCY_KEY) {
        Some(code) if !code.is_empty() => code,
        _ => {
            local_set(FIAT_CURRENCY_KEY, DEFAULT_FIAT);
            DEFAULT_FIAT.to_string()
        }
    }
}

pub fn persist_fiat_currency(code: &str) {
    local_set(FIAT_CURRENCY_KEY, code);
}
