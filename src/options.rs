use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{defaults, header};
use crate::exposed_headers::ExposedHeaders;
use crate::util::{is_header_value, is_http_token};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub allow_origin: String,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

/// Named header sets observed in deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    /// Google API client headers, with preflight header echoing.
    #[default]
    GoogleApi,
    /// `Content-Type` and `Authorization` only, never echoed.
    Basic,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::GoogleApi => "google-api",
            Preset::Basic => "basic",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown CORS preset '{0}', expected 'google-api' or 'basic'")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(Preset::GoogleApi.as_str()) {
            Ok(Preset::GoogleApi)
        } else if trimmed.eq_ignore_ascii_case(Preset::Basic.as_str()) {
            Ok(Preset::Basic)
        } else {
            Err(UnknownPreset(trimmed.to_string()))
        }
    }
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl CorsOptions {
    pub fn preset(preset: Preset) -> Self {
        let (allowed_headers, exposed_headers) = match preset {
            Preset::GoogleApi => (
                AllowedHeaders::mirror_request([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::X_GOOG_API_KEY,
                    header::X_GOOG_API_CLIENT,
                ]),
                ExposedHeaders::list([
                    header::CONTENT_LENGTH,
                    header::CONTENT_TYPE,
                    header::X_GOOG_API_KEY,
                    header::X_GOOG_API_CLIENT,
                ]),
            ),
            Preset::Basic => (
                AllowedHeaders::list([header::CONTENT_TYPE, header::AUTHORIZATION]),
                ExposedHeaders::list([header::CONTENT_LENGTH, header::CONTENT_TYPE]),
            ),
        };

        Self {
            allow_origin: defaults::ALLOW_ORIGIN.to_string(),
            methods: AllowedMethods::default(),
            allowed_headers,
            exposed_headers,
            max_age: Some(defaults::MAX_AGE),
            options_success_status: defaults::PREFLIGHT_STATUS,
        }
    }

    pub fn with_allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allow_origin = origin.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_origin.trim().is_empty() {
            return Err(ValidationError::EmptyAllowOrigin);
        }
        if !is_header_value(&self.allow_origin) {
            return Err(ValidationError::InvalidAllowOrigin(
                self.allow_origin.clone(),
            ));
        }

        if self.methods.values().is_empty() {
            return Err(ValidationError::EmptyMethods);
        }
        if let Some(method) = self
            .methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .allowed_headers
            .values()
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidAllowedHeader(name.clone()));
        }

        if let Some(name) = self.exposed_headers.iter().find(|name| !is_http_token(name)) {
            return Err(ValidationError::InvalidExposedHeader(name.clone()));
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origin must not be empty")]
    EmptyAllowOrigin,
    #[error("allowed origin '{0}' is not a valid header value")]
    InvalidAllowOrigin(String),
    #[error("at least one allowed method is required")]
    EmptyMethods,
    #[error("allowed method '{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header '{0}' is not a valid header name")]
    InvalidAllowedHeader(String),
    #[error("exposed header '{0}' is not a valid header name")]
    InvalidExposedHeader(String),
    #[error("preflight status {0} is not a 2xx status code")]
    InvalidPreflightStatus(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
