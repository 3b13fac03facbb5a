//! Binding to the Freemius checkout widget (`FS.Checkout`), loaded by
//! `index.html` as a plain script.

use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use yew::Callback;

use crate::config;
use crate::pricing::plans::{Billing, Plan};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = FS, js_name = Checkout)]
    #[derive(Clone)]
    type FreemiusCheckout;

    #[wasm_bindgen(constructor, catch, js_namespace = FS, js_class = "Checkout")]
    fn new(config: &JsValue) -> Result<FreemiusCheckout, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Checkout")]
    fn open(this: &FreemiusCheckout, options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Freemius checkout script not loaded")]
    NotLoaded,
    #[error("checkout options could not be built: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),
    #[error("checkout widget rejected the call: {0:?}")]
    Widget(JsValue),
}

#[derive(Serialize)]
struct HandlerConfig<'a> {
    product_id: &'a str,
    plan_id: &'a str,
    public_key: &'a str,
    image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PurchaseUser {
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PurchaseLicense {
    pub key: String,
}

/// The parts of a Freemius purchase response the site shows to the buyer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PurchaseResponse {
    pub user: PurchaseUser,
    pub license: PurchaseLicense,
}

#[derive(Clone)]
pub struct CheckoutHandler {
    widget: FreemiusCheckout,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn freemius_loaded() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("FS")).unwrap_or(false))
        .unwrap_or(false)
}

/// Wraps a purchase callback so the raw response is logged and then decoded
/// before `on_purchase` sees it.
fn purchase_callback(label: &'static str, on_purchase: Callback<PurchaseResponse>) -> JsValue {
    Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        gloo_console::log!(label, response.clone());
        match serde_wasm_bindgen::from_value::<PurchaseResponse>(response) {
            Ok(purchase) => {
                log::info!("User email: {}", purchase.user.email);
                log::info!("License key: {}", purchase.license.key);
                on_purchase.emit(purchase);
            }
            Err(e) => gloo_console::error!(format!("Could not read purchase response: {}", e)),
        }
    })
    .into_js_value()
}

impl CheckoutHandler {
    pub fn init() -> Result<Self, CheckoutError> {
        if !freemius_loaded() {
            return Err(CheckoutError::NotLoaded);
        }
        let handler_config = to_js(&HandlerConfig {
            product_id: config::FREEMIUS_PRODUCT_ID,
            plan_id: config::FREEMIUS_PLAN_ID,
            public_key: config::FREEMIUS_PUBLIC_KEY,
            image: config::checkout_logo_url(),
        })?;
        let widget = FreemiusCheckout::new(&handler_config).map_err(CheckoutError::Widget)?;
        Ok(Self { widget })
    }

    /// Opens the checkout dialog for `plan`. `on_completed` fires as soon as the
    /// payment goes through, `on_success` once the buyer closes the dialog.
    pub fn open(
        &self,
        plan: Plan,
        billing: Billing,
        on_completed: Callback<PurchaseResponse>,
        on_success: Callback<PurchaseResponse>,
    ) -> Result<(), CheckoutError> {
        let options = to_js(&json!({
            "name": plan.checkout_name(billing),
            "licenses": plan.licenses(),
        }))?;
        Reflect::set(
            &options,
            &JsValue::from_str("purchaseCompleted"),
            &purchase_callback("Purchase completed:", on_completed),
        )
        .map_err(CheckoutError::Widget)?;
        Reflect::set(
            &options,
            &JsValue::from_str("success"),
            &purchase_callback("Checkout closed after successful purchase:", on_success),
        )
        .map_err(CheckoutError::Widget)?;

        log::info!("Opening checkout for {}", plan.checkout_name(billing));
        self.widget.open(&options).map_err(CheckoutError::Widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_response_ignores_unknown_fields() {
        let raw = json!({
            "user": { "id": 7, "email": "dr.smith@example.com", "first": "Ann" },
            "license": { "id": 3, "key": "sk_abc123", "quota": 1 },
            "purchase": { "id": 99 }
        });
        let purchase: PurchaseResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(purchase.user.email, "dr.smith@example.com");
        assert_eq!(purchase.license.key, "sk_abc123");
    }

    #[test]
    fn purchase_response_requires_license_key() {
        let raw = json!({ "user": { "email": "a@b.c" }, "license": {} });
        assert!(serde_json::from_value::<PurchaseResponse>(raw).is_err());
    }

    #[test]
    fn not_loaded_message_matches_console_text() {
        assert_eq!(CheckoutError::NotLoaded.to_string(), "Freemius checkout script not loaded");
    }
}
