use crate::constants::method;
use crate::util::dedupe_trimmed;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Case-sensitive to preserve caller intent; duplicates differing only in
/// case are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedupe_trimmed(values))
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
