//! Forwards requests under the configured prefixes to the file backend.
//!
//! Redirects are handed back to the browser untouched so the login flow and
//! the session cookie behave as if the backend were the page origin.

use std::{error::Error, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use http_body_util::LengthLimitError;
use tracing::{debug, info, warn};

use crate::config::ProxyConfig;

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    config: Arc<ProxyConfig>,
}

pub fn router(config: ProxyConfig) -> anyhow::Result<Router> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("Failed to build proxy http client")?;

    let mut router: Router<ProxyState> = Router::new();
    for prefix in &config.prefixes {
        info!("Proxying {prefix}/* to {}", config.backend_url);
        router = router.route(&format!("{prefix}/{{*rest}}"), any(forward));
    }
    Ok(router.with_state(ProxyState { client, config: Arc::new(config) }))
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection" | "keep-alive" | "proxy-authenticate" | "proxy-authorization" | "te" | "trailer" | "transfer-encoding" | "upgrade"
    )
}

fn is_over_limit(err: &axum::Error) -> bool {
    err.source().is_some_and(|source| source.is::<LengthLimitError>())
}

async fn forward_request(state: &ProxyState, request: Request) -> anyhow::Result<Response> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| parts.uri.path());
    let url = format!("{}{}", state.config.backend_url, path_and_query);
    debug!("forward: {} {}", parts.method, url);

    let body = match to_bytes(body, state.config.max_body_bytes).await {
        Ok(body) => body,
        Err(e) if is_over_limit(&e) => {
            warn!("forward: {} {} body over {} bytes", parts.method, parts.uri.path(), state.config.max_body_bytes);
            return Ok((StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response());
        }
        Err(e) => return Err(e).context("Failed to read request body"),
    };
    let mut upstream = state.client.request(parts.method.clone(), &url).body(body);
    for (name, value) in parts.headers.iter() {
        if name == header::HOST || name == header::CONTENT_LENGTH || is_hop_by_hop(name) {
            continue;
        }
        upstream = upstream.header(name, value);
    }

    let response = upstream.send().await.with_context(|| format!("Failed to reach backend at {url}"))?;
    info!("forward: {} {} -> {}", parts.method, parts.uri.path(), response.status());

    let mut builder = Response::builder().status(response.status());
    for (name, value) in response.headers().iter() {
        // body is streamed back, the length is re-derived
        if name == header::CONTENT_LENGTH || is_hop_by_hop(name) {
            continue;
        }
        builder = builder.header(name, value);
    }
    builder.body(Body::from_stream(response.bytes_stream())).context("Failed to build proxied response")
}

async fn forward(State(state): State<ProxyState>, request: Request) -> Response {
    let target = request.uri().path().to_string();
    match forward_request(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("forward: request to {target} failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}
