#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://medicalbeforeaftergallery.com"
}

pub const SUPPORT_EMAIL: &str = "support@medicalbeforeaftergallery.com";

// Anchor scrolling lands this far above the target so the fixed header doesn't cover it.
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const STICKY_HEADER_AFTER_PX: f64 = 100.0;
pub const SCROLL_TOP_AFTER_PX: f64 = 300.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const DEFAULT_REVEAL_PERCENT: f64 = 50.0;

pub const PURCHASE_NOTICE_MS: u32 = 3_000;
pub const COPIED_NOTICE_MS: u32 = 2_000;
pub const SUCCESS_MODAL_MS: u32 = 10_000;

pub const FREEMIUS_PRODUCT_ID: &str = "20099";
pub const FREEMIUS_PLAN_ID: &str = "33353";
pub const FREEMIUS_PUBLIC_KEY: &str = "pk_6303cf40cc7629d8361bc8762da77";

pub fn checkout_logo_url() -> String {
    format!("{}/assets/logo-100x100.png", get_site_url())
}
