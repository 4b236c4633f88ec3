use crate::util::dedupe_trimmed;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Always emit the configured list.
    List(Vec<String>),
    /// On preflight, echo the request's `Access-Control-Request-Headers`
    /// value verbatim. The list is used when the request carries none, and
    /// on every non-preflight response.
    MirrorRequest(Vec<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedupe_trimmed(values))
    }

    pub fn mirror_request<I, S>(fallback: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MirrorRequest(dedupe_trimmed(fallback))
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::List(values) | Self::MirrorRequest(values) => values,
        }
    }

    pub fn mirrors_request(&self) -> bool {
        matches!(self, Self::MirrorRequest(_))
    }

    /// Value for a preflight response given the request's
    /// `Access-Control-Request-Headers`, if it sent one.
    pub fn preflight_value(&self, requested: Option<&str>) -> Option<String> {
        if let Self::MirrorRequest(_) = self {
            let requested = requested.map(str::trim_ascii).filter(|value| !value.is_empty());
            if let Some(value) = requested {
                return Some(value.to_string());
            }
        }
        self.list_value()
    }

    /// Value for a decorated (non-preflight) response.
    pub fn list_value(&self) -> Option<String> {
        let values = self.values();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
