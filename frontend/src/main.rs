//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::logger::tracing;

        let router = dioxus::server::router(App);
        // same-origin access to the backend's login and session endpoints
        match proxy::auth_proxy::router(proxy::config::ProxyConfig::load()) {
            Ok(auth_proxy) => Ok(router.merge(auth_proxy)),
            Err(e) => {
                tracing::error!("auth proxy disabled: {:#?}", e);
                Ok(router)
            }
        }
    });
}
