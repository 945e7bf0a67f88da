//! The API endpoint context: one validated base URL per process run.
//!
//! The shell builds a single [`ApiEndpoint`] at start-up and hands clones to every
//! consumer. Clones share one allocation, so every consumer observes the same value.
//! No requests are made from here; [`ApiEndpoint::endpoint`] only builds URLs.

mod error;

pub use self::error::{ApiEndpointError, ApiEndpointErrorExt};

use shelf_domain::config::ApiEndpointConfig;
use std::sync::Arc;
use tracing::info;
use url::Url;

#[derive(Debug)]
struct ApiEndpointInner {
    config: ApiEndpointConfig,
    url: Url,
}

#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    inner: Arc<ApiEndpointInner>,
}

impl ApiEndpoint {
    /// Validates the configured base URL. Trailing slashes are dropped.
    ///
    /// # Errors
    /// * [`ApiEndpointError::Url`] if the value is not an absolute URL.
    /// * [`ApiEndpointError::Unsupported`] for non-HTTP schemes or URLs carrying a
    ///   query string or fragment.
    pub fn new(config: ApiEndpointConfig) -> Result<Self, ApiEndpointError> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        let url = Url::parse(base_url).context(format!("base_url '{base_url}'"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiEndpointError::Unsupported {
                message: format!("scheme '{}' is not http(s)", url.scheme()).into(),
                context: Some(base_url.to_owned().into()),
            });
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiEndpointError::Unsupported {
                message: "base URL must not carry a query string or fragment".into(),
                context: Some(base_url.to_owned().into()),
            });
        }

        info!(base_url, "API endpoint configured");

        let config = ApiEndpointConfig { base_url: base_url.to_owned() };
        Ok(Self { inner: Arc::new(ApiEndpointInner { config, url }) })
    }

    #[must_use]
    pub fn get(&self) -> &ApiEndpointConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.inner.url
    }

    /// Joins a resource path onto the base URL: `stock/items` → `<base>/stock/items`.
    ///
    /// # Errors
    /// Returns [`ApiEndpointError::Url`] if `resource` cannot be joined.
    pub fn endpoint(&self, resource: &str) -> Result<Url, ApiEndpointError> {
        let mut base = self.inner.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(resource.trim_start_matches('/')).context(format!("resource '{resource}'"))
    }

    /// Whether both handles were produced by the same [`ApiEndpoint::new`] call.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ApiEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for ApiEndpoint {}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base_url: &str) -> Result<ApiEndpoint, ApiEndpointError> {
        ApiEndpoint::new(ApiEndpointConfig { base_url: base_url.to_owned() })
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let api = endpoint("http://localhost:5000/api/").expect("valid url");
        assert_eq!(api.base_url(), "http://localhost:5000/api");
        assert_eq!(api.get().base_url, "http://localhost:5000/api");
    }

    #[test]
    fn endpoint_joins_below_base_path() {
        let api = endpoint("http://localhost:5000/api").expect("valid url");
        assert_eq!(api.endpoint("stock").expect("join").as_str(), "http://localhost:5000/api/stock");
        assert_eq!(
            api.endpoint("/stock/items").expect("join").as_str(),
            "http://localhost:5000/api/stock/items"
        );
    }

    #[test]
    fn rejects_relative_and_foreign_urls() {
        assert!(matches!(endpoint("localhost/api"), Err(ApiEndpointError::Url { .. })));
        assert!(matches!(endpoint("ftp://files.local/api"), Err(ApiEndpointError::Unsupported { .. })));
        assert!(matches!(
            endpoint("http://localhost:5000/api?key=1"),
            Err(ApiEndpointError::Unsupported { .. })
        ));
    }
}
