//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Native apps and server-to-server calls are not
//!   restricted by CORS.
//! - This middleware should be applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Allow only the configured origin allow-list (exact match); by default that is
//!   the single local frontend dev origin.
//! - Credentialed requests are permitted, so methods and headers mirror the request
//!   instead of using a literal wildcard (`Any` cannot be combined with
//!   `allow_credentials(true)`).
//! - Preflight (OPTIONS) requests from a permitted origin are answered by the layer
//!   itself; downstream handlers never see them.
//! - Requests from other origins still get the normal payload, just without CORS
//!   headers. The browser is the enforcement point.

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

/// Apply the CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    // If the allowlist is empty, we intentionally allow none (no CORS headers),
    // which is safer than accidentally allowing all.
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    router.layer(cors)
}
