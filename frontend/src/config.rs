//! Backend address baked in at build time.

use common::config::ApiConfig;

/// `FILE_EXPLORER_API_URL` at build time; empty means the page's own origin.
pub fn api_config() -> ApiConfig {
    ApiConfig::resolve(option_env!("FILE_EXPLORER_API_URL"), page_origin())
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
