use crate::headers::Headers;

/// Response to send in place of the delegate for an `OPTIONS` request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to merge into the delegate's response.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    /// Always written, replacing whatever the delegate set.
    pub headers: Headers,
    /// Written only when the delegate did not set them.
    pub fallback_headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
}
