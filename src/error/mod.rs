mod app;
mod config;
mod http;
mod probe;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use probe::ProbeError;
pub use validation::ValidationError;
