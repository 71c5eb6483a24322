use std::time::Duration;

/// A named HTTP(S) target with its own timeout. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    name: String,
    url: String,
    timeout_ms: u64,
}

impl EndpointDescriptor {
    /// Builds a descriptor; returns `None` when the timeout is zero.
    ///
    /// URL validation happens in the config loader, which owns the error
    /// reporting for it.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, timeout_ms: u64) -> Option<Self> {
        if timeout_ms == 0 {
            return None;
        }
        Some(Self {
            name: name.into(),
            url: url.into(),
            timeout_ms,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
