use serde::Deserialize;

/// On-disk configuration. Keys are also accepted in their capitalized
/// spelling (`[[Endpoint]]`, `Name`, `URL`, `Timeout`).
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default, alias = "Endpoint", alias = "endpoints")]
    pub endpoint: Vec<EndpointConfig>,
    pub no_ui: Option<bool>,
    pub show_errors: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "URL", alias = "Url")]
    pub url: String,
    /// Milliseconds. Signed so that negative values get a precise error.
    #[serde(alias = "Timeout")]
    pub timeout: i64,
}
