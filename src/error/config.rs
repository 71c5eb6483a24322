use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Config defines no endpoints.")]
    NoEndpoints,
    #[error("Endpoint {index} has an empty name.")]
    EmptyName { index: usize },
    #[error("Endpoint '{name}' timeout must be a positive number of milliseconds (got {value}).")]
    NonPositiveTimeout { name: String, value: i64 },
    #[error("Endpoint '{name}' has an invalid URL '{url}': {source}")]
    InvalidUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{name}' URL '{url}' must use http or https.")]
    UnsupportedScheme { name: String, url: String },
}
