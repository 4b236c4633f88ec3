use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.is_preflight() {
            CorsDecision::Preflight(self.process_preflight(request))
        } else {
            CorsDecision::Simple(self.process_simple())
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> PreflightResult {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        headers.extend(builder.build_origin_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_preflight_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        PreflightResult {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    fn process_simple(&self) -> SimpleResult {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_exposed_headers());

        SimpleResult {
            headers: headers.into_headers(),
            fallback_headers: builder.build_origin_header().into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
