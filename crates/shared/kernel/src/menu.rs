//! Menu projection of the route registry.

use crate::navigation::Location;
use crate::registry::RouteRegistry;
use std::borrow::Cow;

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Route id, used as the rendering key.
    pub key: u32,
    pub target: Cow<'static, str>,
    pub label: Cow<'static, str>,
    /// Whether the item points at the current location.
    pub active: bool,
}

/// One item per route, in registry order.
#[must_use]
pub fn items(registry: &RouteRegistry, current: &Location) -> Vec<MenuItem> {
    let current = current.path();
    registry
        .iter()
        .map(|route| MenuItem {
            key: route.id,
            target: route.path.clone(),
            label: route.name.clone(),
            active: route.path == current,
        })
        .collect()
}
