mod app;
mod config;
mod probe;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use probe::ProbeError;
