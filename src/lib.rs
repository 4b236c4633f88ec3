mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
pub mod middleware;
mod options;
mod result;
pub mod server;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{Config, ConfigError};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use middleware::{SharedCors, cors_middleware};
pub use options::{CorsOptions, Preset, UnknownPreset, ValidationError};
pub use result::{CorsDecision, PreflightResult, SimpleResult};
pub use server::{ServerError, app};
