use crate::error::{BootstrapError, BootstrapErrorExt};
use crate::pages::{self, Page};
use shelf_domain::config::ClientConfig;
use shelf_domain::route::RouteTable;
use shelf_kernel::api::ApiEndpoint;
use shelf_kernel::navigation::Location;
use shelf_kernel::registry::RouteRegistry;
use tracing::info;

/// Everything the shell needs, built once before mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub api: ApiEndpoint,
    pub registry: RouteRegistry,
    pub initial_location: Location,
}

impl AppContext {
    /// Builds the context from configuration and the built-in page table.
    ///
    /// # Errors
    /// See [`AppContext::with_table`].
    pub fn bootstrap(config: &ClientConfig) -> Result<Self, BootstrapError> {
        Self::with_table(config, pages::ROUTES)
    }

    /// Builds the context from configuration and an explicit route table.
    ///
    /// # Errors
    /// * [`BootstrapError::Api`] if the configured base URL is invalid.
    /// * [`BootstrapError::Registry`] if the table is malformed.
    /// * [`BootstrapError::UnknownContent`] if a route names content no page provides.
    pub fn with_table(config: &ClientConfig, table: RouteTable<'_>) -> Result<Self, BootstrapError> {
        let api = ApiEndpoint::new(config.api.clone()).context("[api] section")?;
        let registry = RouteRegistry::from_table(table).context("page table")?;

        if let Some((index, route)) =
            registry.iter().enumerate().find(|(_, route)| Page::from_key(&route.content).is_none())
        {
            return Err(BootstrapError::UnknownContent {
                index,
                key: route.content.clone(),
                context: None,
            });
        }

        let initial_location = Location::from(config.navigation.initial_location.clone());

        info!(
            api = api.base_url(),
            routes = registry.len(),
            initial = %initial_location,
            "Dashboard context ready"
        );

        Ok(Self { api, registry, initial_location })
    }
}
