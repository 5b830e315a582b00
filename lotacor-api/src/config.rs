use crate::error::{QueryError, Result};
use reqwest::Url;

/// Path served alongside the web app (proxied to the Lotacor backend).
pub const DEFAULT_ENDPOINT: &str = "/api/testQuery";

/// The public Lotacor endpoint, used by the standalone page and the CLI.
pub const STANDALONE_ENDPOINT: &str = "https://lotacor.pt/api/testQuery";

/// Runtime settings for the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Absolute URL, or a path resolved against the page origin
    pub endpoint: String,
    /// Issue one query with the default parameters as soon as the app mounts
    pub fetch_on_mount: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fetch_on_mount: false,
        }
    }
}

impl ExplorerConfig {
    /// Settings of the standalone page: public endpoint, fetch on load.
    pub fn standalone() -> Self {
        Self {
            endpoint: STANDALONE_ENDPOINT.to_string(),
            fetch_on_mount: true,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Turn the configured endpoint into an absolute URL.
    ///
    /// Absolute endpoints are used as they are; relative ones need a `base`
    /// (the page origin in the browser).
    pub fn resolve_endpoint(&self, base: Option<&str>) -> Result<Url> {
        let invalid = |reason: String| QueryError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        match Url::parse(&self.endpoint) {
            Ok(url) => Ok(url),
            Err(_) => {
                let base = base
                    .ok_or_else(|| invalid("relative endpoint without a base URL".to_string()))?;
                let base = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
                base.join(&self.endpoint).map_err(|e| invalid(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoint_joins_origin() {
        let config = ExplorerConfig::default();
        let url = config.resolve_endpoint(Some("http://localhost:8080")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/testQuery");
    }

    #[test]
    fn absolute_endpoint_ignores_base() {
        let config = ExplorerConfig::standalone();
        let url = config.resolve_endpoint(Some("http://localhost:8080")).unwrap();
        assert_eq!(url.as_str(), STANDALONE_ENDPOINT);
        assert!(config.fetch_on_mount);
    }

    #[test]
    fn relative_endpoint_needs_base() {
        let err = ExplorerConfig::default().resolve_endpoint(None).unwrap_err();
        assert!(matches!(err, QueryError::InvalidEndpoint { .. }));
    }
}
