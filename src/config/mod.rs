//! Configuration loading and endpoint validation.
mod endpoints;
mod loader;
pub mod types;


pub use endpoints::resolve_endpoints;
pub use loader::{DEFAULT_CONFIG_PATH, load_config};
