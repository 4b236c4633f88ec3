use cors_edge::constants::method;
use cors_edge::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, ExposedHeaders, Preset,
    RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    preset: Option<Preset>,
    allow_origin: Option<String>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    max_age: Option<Option<u64>>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allow_origin = Some(origin.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn max_age(mut self, value: Option<u64>) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::preset(self.preset.unwrap_or_default());

        Cors::new(CorsOptions {
            allow_origin: self.allow_origin.unwrap_or(defaults.allow_origin),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            options_success_status: defaults.options_success_status,
        })
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    url: String,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            url: "http://edge.test/".into(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            url: &self.url,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `OPTIONS` spelling, for case-insensitivity checks.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let PreflightRequestBuilder {
            method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method.as_deref().unwrap_or(method::OPTIONS),
            url: "http://edge.test/anything",
            access_control_request_headers: request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
