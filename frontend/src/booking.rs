//! Thin wrapper around the Cal.com embed.
//!
//! The embed script (`embed.js`) defines a global `Cal` function; we only
//! ever ask it to open the booking modal.

use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = Cal)]
    fn cal(action: &str, options: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ModalOptions<'a> {
    cal_link: &'a str,
}

/// Reduces a full `https://cal.com/...` URL to the `user/event` form the
/// embed expects. Returns `None` for an empty link.
pub fn normalize_cal_link(link: &str) -> Option<String> {
    let link = link.trim();
    let link = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link);
    let link = link
        .strip_prefix("app.cal.com/")
        .or_else(|| link.strip_prefix("cal.com/"))
        .unwrap_or(link);
    let link = link.trim_matches('/');
    (!link.is_empty()).then(|| link.to_string())
}

/// Opens the booking modal for `cal_link`.
///
/// Does nothing (besides logging) when the embed script is not loaded.
pub fn open_booking_modal(cal_link: &str) {
    let Some(cal_link) = normalize_cal_link(cal_link) else {
        error!("refusing to open booking modal for an empty link");
        return;
    };

    let options = match serde_wasm_bindgen::to_value(&ModalOptions { cal_link: &cal_link }) {
        Ok(options) => options,
        Err(err) => {
            error!("failed to build booking options: {err}");
            return;
        }
    };

    match cal("modal", options) {
        Ok(()) => info!("opened booking modal for {cal_link}"),
        Err(err) => warn!("booking embed unavailable: {err:?}"),
    }
}

/// Click handler that opens the booking modal.
pub fn booking_callback(cal_link: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        open_booking_modal(cal_link);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cal_link() {
        assert_eq!(normalize_cal_link("speedweb/30min").as_deref(), Some("speedweb/30min"));
        assert_eq!(
            normalize_cal_link("https://cal.com/speedweb/30min/").as_deref(),
            Some("speedweb/30min")
        );
        assert_eq!(
            normalize_cal_link(" http://app.cal.com/speedweb/intro ").as_deref(),
            Some("speedweb/intro")
        );
        assert_eq!(normalize_cal_link(""), None);
        assert_eq!(normalize_cal_link("https://cal.com/"), None);
    }

    #[test]
    fn test_modal_options_shape() {
        let value = serde_json::to_value(ModalOptions { cal_link: "speedweb/30min" }).unwrap();
        assert_eq!(value, serde_json::json!({ "calLink": "speedweb/30min" }));
    }
}
