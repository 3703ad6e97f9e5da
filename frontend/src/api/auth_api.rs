//! Browser navigations into the backend's session flow.

use common::{config::ApiConfig, endpoints::Endpoint};
use dioxus::logger::tracing;

pub fn login_url(config: &ApiConfig) -> String {
    Endpoint::Login.url(&config.base_url)
}

/// Target of the native logout form; the backend clears the cookie and redirects.
pub fn logout_url(config: &ApiConfig) -> String {
    Endpoint::Logout.url(&config.base_url)
}

/// Full-page navigation to the identity provider.
pub fn begin_login(config: &ApiConfig) {
    let url = login_url(config);
    let Some(window) = web_sys::window() else {
        tracing::error!("begin_login: no browser window");
        return;
    };
    tracing::info!("begin_login: redirecting to {url}");
    if let Err(e) = window.location().set_href(&url) {
        tracing::error!("begin_login: navigation to {url} failed: {e:?}");
    }
}
