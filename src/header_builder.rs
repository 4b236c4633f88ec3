use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.allow_origin.as_str(),
        );
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    /// Allowed headers for a preflight response, echoing the request when
    /// the options mirror it.
    pub(crate) fn build_preflight_allowed_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        match self
            .options
            .allowed_headers
            .preflight_value(request.access_control_request_headers)
        {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        match self.options.allowed_headers.list_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(seconds) = self.options.max_age {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
