use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::HOST},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

pub type SharedCors = Arc<Cors>;

/// Answers `OPTIONS` requests directly and decorates every other response
/// produced by `next` with the configured CORS headers.
pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    info!(method = %owned_ctx.method, url = %owned_ctx.url, "inbound request");

    match cors.check(&owned_ctx.as_request_context()) {
        CorsDecision::Preflight(result) => preflight_response(result),
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            decorate(response.headers_mut(), &result);
            response
        }
    }
}

fn preflight_response(result: PreflightResult) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() =
        StatusCode::from_u16(result.status).unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), &result.headers);
    response
}

/// Existing delegate headers are kept except where `result.headers`
/// replaces them; fallback headers fill gaps only.
pub(crate) fn decorate(map: &mut HeaderMap, result: &SimpleResult) {
    apply_missing_headers(map, &result.fallback_headers);
    apply_headers(map, &result.headers);
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let Some((header_name, header_value)) = to_header_pair(name, value) {
            map.insert(header_name, header_value);
        }
    }
}

fn apply_missing_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let Some((header_name, header_value)) = to_header_pair(name, value)
            && !map.contains_key(&header_name)
        {
            map.insert(header_name, header_value);
        }
    }
}

fn to_header_pair(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let header_value =
        latin1_encode(value).and_then(|bytes| HeaderValue::from_bytes(&bytes).ok());
    match (HeaderName::try_from(name), header_value) {
        (Ok(header_name), Some(header_value)) => Some((header_name, header_value)),
        _ => {
            warn!(header = name, "skipping CORS header that is not valid on the wire");
            None
        }
    }
}

struct OwnedRequestContext {
    method: String,
    url: String,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            url: request_url(request),
            access_control_request_headers: joined_header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            url: &self.url,
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

/// Absolute URL when the request target or `Host` header allows one,
/// otherwise the raw request target.
fn request_url(request: &Request) -> String {
    let uri = request.uri();
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    match header_value(request.headers(), HOST.as_str()) {
        Some(host) => format!("http://{host}{uri}"),
        None => uri.to_string(),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Every line of `name` joined with `", "`. Non-ASCII bytes are read as
/// Latin-1 so `to_header_pair` can write them back unchanged.
fn joined_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|value| latin1_decode(value.as_bytes()))
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn latin1_encode(value: &str) -> Option<Vec<u8>> {
    value.chars().map(|ch| u8::try_from(ch).ok()).collect()
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
