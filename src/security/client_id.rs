//! Client identity for rate limiting.
//!
//! # Design Decisions
//! - Trusts the first hop of `X-Forwarded-For` as the deployment sits behind
//!   a platform proxy that sets it
//! - No IP validation; the value is an opaque bucket key
//! - Requests without a usable value share the `unknown` bucket

use axum::http::HeaderMap;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Bucket key for requests with no forwarded address.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Derive the rate-limit key for a request.
pub fn client_id(headers: &HeaderMap) -> String {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}
