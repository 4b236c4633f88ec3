pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_GOOG_API_KEY: &str = "x-goog-api-key";
    pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod env {
    pub const ALLOW_ORIGIN: &str = "ALLOW_ORIGIN";
    pub const CORS_PRESET: &str = "CORS_PRESET";
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
}

pub mod defaults {
    pub const ALLOW_ORIGIN: &str = "*";
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 80;
    /// One day, in seconds.
    pub const MAX_AGE: u64 = 86_400;
    pub const PREFLIGHT_STATUS: u16 = 204;
}
