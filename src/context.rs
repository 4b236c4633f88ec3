use crate::constants::method;

/// The parts of an inbound request the CORS engine looks at.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Only logged; `Cors::check` does not read it.
    pub url: &'a str,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestContext<'_> {
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}
