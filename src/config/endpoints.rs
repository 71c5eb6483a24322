use url::Url;

use crate::error::ConfigError;
use crate::probe::EndpointDescriptor;

use super::types::{ConfigFile, EndpointConfig};

/// Validates the configured entries and returns them in declaration order.
///
/// # Errors
///
/// Returns an error for an empty endpoint list, an empty name, a URL that is
/// not absolute http(s), or a timeout that is not a positive integer.
pub fn resolve_endpoints(config: &ConfigFile) -> Result<Vec<EndpointDescriptor>, ConfigError> {
    if config.endpoint.is_empty() {
        return Err(ConfigError::NoEndpoints);
    }
    config
        .endpoint
        .iter()
        .enumerate()
        .map(|(index, entry)| resolve_endpoint(index, entry))
        .collect()
}

fn resolve_endpoint(index: usize, entry: &EndpointConfig) -> Result<EndpointDescriptor, ConfigError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(ConfigError::EmptyName {
            index: index.saturating_add(1),
        });
    }

    let url = Url::parse(&entry.url).map_err(|source| ConfigError::InvalidUrl {
        name: name.to_owned(),
        url: entry.url.clone(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            name: name.to_owned(),
            url: entry.url.clone(),
        });
    }

    u64::try_from(entry.timeout)
        .ok()
        .and_then(|timeout_ms| EndpointDescriptor::new(name, entry.url.clone(), timeout_ms))
        .ok_or_else(|| ConfigError::NonPositiveTimeout {
            name: name.to_owned(),
            value: entry.timeout,
        })
}
