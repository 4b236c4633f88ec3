use indexmap::IndexMap;

/// Header name/value pairs in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Inserts `name`, replacing any entry whose name matches case-insensitively.
    pub(crate) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let existing = self
            .headers
            .keys()
            .position(|key| key.eq_ignore_ascii_case(&name));

        match existing {
            Some(index) => {
                if let Some((_, slot)) = self.headers.get_index_mut(index) {
                    *slot = value.into();
                }
            }
            None => {
                self.headers.insert(name, value.into());
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
