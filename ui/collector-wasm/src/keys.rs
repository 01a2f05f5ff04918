//! Key reveal modals.
//!
//! Public keys are rendered as QR codes straight from the trigger's
//! data attribute. Private keys are fetched on demand so they are never
//! embedded in the page markup.

use qrcode::QrCode;
use qrcode::render::svg;
use web_sys::Element;

use crate::api;
use crate::dom;

/// Render `data` as an SVG QR code, sized for the modal.
pub fn qr_svg(data: &str) -> Option<String> {
    let code = QrCode::new(data.as_bytes()).ok()?;
    Some(
        code.render::<svg::Color>()
            .min_dimensions(200, 200)
            .build(),
    )
}

/// Open the modal preceding the trigger with the public key's QR code.
pub fn open_public_qr_modal(trigger: &Element) {
    let Some(modal) = dom::prev_el(trigger) else {
        return;
    };
    let Some(public_key) = trigger.get_attribute("data-public-key") else {
        return;
    };
    if let Some(contents) = dom::query_within(&modal, ".modal-contents") {
        if let Some(svg) = qr_svg(&public_key) {
            dom::set_inner_html(&contents, &svg);
        }
    }
    dom::show(&modal);
}

/// Fetch the private key from the server and reveal it in the modal.
///
/// Fetched on click rather than embedded so keys cannot be scraped from
/// the page; a failed fetch leaves the modal unopened.
pub async fn reveal_private_key(trigger: &Element) {
    let Some(modal) = dom::prev_el(trigger) else {
        return;
    };
    let js_id = trigger.get_attribute("data-js-id").unwrap_or_default();

    if let Ok(private_key) = api::get_text("/wallets/get_private_key/", &[("js_id", &js_id)]).await
    {
        let private_key = private_key.trim().to_string();
        if let Some(contents) = dom::query_within(&modal, ".modal-contents") {
            if let Some(svg) = qr_svg(&private_key) {
                dom::set_inner_html(&contents, &svg);
            }
        }
        if let Some(bottom) = dom::query_within(&modal, ".modal-bottom-section") {
            dom::set_text(&bottom, &private_key);
        }
        dom::show(&modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_render_produces_svg_markup() {
        let svg = qr_svg("5Kb8kLf9zgWQnogidDA76MzPL6TsZZY36hWXMssSzNydYXYB9KF").unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        assert!(svg.contains("svg"));
    }
}
