//! The route registry: an ordered, immutable set of validated route descriptors.
//!
//! A registry is built once from a hard-coded [`RouteTable`] and then shared by
//! cheap clones with every consumer. There is no way to add, remove or reorder
//! routes afterwards.

mod error;

pub use self::error::{RegistryValidationError, RegistryValidationErrorExt};

use fxhash::FxHashMap;
use shelf_domain::route::{RouteDescriptor, RouteEntry, RouteTable};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Arc<[RouteDescriptor]>,
}

impl RouteRegistry {
    /// Validates `table` and builds the registry.
    ///
    /// Validation stops at the first malformed entry; the error names its index.
    /// Running it again on the same table always yields the same error.
    ///
    /// # Errors
    /// * [`RegistryValidationError::Empty`] for a table without entries.
    /// * [`RegistryValidationError::EmptySlot`] for a `None` slot.
    /// * [`RegistryValidationError::MissingField`] for a blank path, name or content.
    /// * [`RegistryValidationError::InvalidPath`] for a path that is not an absolute URL path.
    /// * [`RegistryValidationError::DuplicatePath`] / [`RegistryValidationError::DuplicateId`]
    ///   when an entry repeats an earlier one.
    pub fn from_table(table: RouteTable<'_>) -> Result<Self, RegistryValidationError> {
        if table.is_empty() {
            return Err(RegistryValidationError::Empty { context: None });
        }

        let mut paths: FxHashMap<&str, usize> = FxHashMap::default();
        let mut ids: FxHashMap<u32, usize> = FxHashMap::default();
        let mut routes = Vec::with_capacity(table.len());

        for (index, slot) in table.iter().enumerate() {
            let Some(entry) = slot else {
                return Err(RegistryValidationError::EmptySlot { index, context: None });
            };
            check_fields(index, entry)?;

            if let Some(&first) = paths.get(entry.path) {
                return Err(RegistryValidationError::DuplicatePath {
                    index,
                    first,
                    path: Cow::Borrowed(entry.path),
                    context: None,
                });
            }
            if let Some(&first) = ids.get(&entry.id) {
                return Err(RegistryValidationError::DuplicateId {
                    index,
                    first,
                    id: entry.id,
                    context: None,
                });
            }
            paths.insert(entry.path, index);
            ids.insert(entry.id, index);

            debug!(index, id = entry.id, path = entry.path, "Route registered");
            routes.push(RouteDescriptor::from(*entry));
        }

        info!(routes = routes.len(), "Route registry built");
        Ok(Self { routes: routes.into() })
    }

    /// All routes in table order.
    #[must_use]
    pub fn list(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false` for a registry built by [`RouteRegistry::from_table`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RouteDescriptor> {
        self.routes.get(index)
    }

    /// First route whose path equals `path` exactly, with its table index.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<(usize, &RouteDescriptor)> {
        self.routes.iter().enumerate().find(|(_, route)| route.path == path)
    }

    /// Whether both handles share the same underlying registry.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.routes, &other.routes)
    }
}

/// Identity comparison: the registry never changes, so a shared handle is the same value.
impl PartialEq for RouteRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for RouteRegistry {}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

fn check_fields(index: usize, entry: &RouteEntry) -> Result<(), RegistryValidationError> {
    let blank = [("path", entry.path), ("name", entry.name), ("content", entry.content)]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

    if let Some((field, _)) = blank {
        return Err(RegistryValidationError::MissingField { index, field, context: None });
    }

    if !is_route_path(entry.path) {
        return Err(RegistryValidationError::InvalidPath {
            index,
            path: Cow::Borrowed(entry.path),
            context: None,
        });
    }

    Ok(())
}

/// An absolute URL path without query, fragment or whitespace.
fn is_route_path(path: &str) -> bool {
    path.starts_with('/') && !path.chars().any(|c| c.is_whitespace() || c == '?' || c == '#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_path_rules() {
        assert!(is_route_path("/"));
        assert!(is_route_path("/stock/items"));
        assert!(!is_route_path("stock"));
        assert!(!is_route_path("/stock?page=2"));
        assert!(!is_route_path("/stock#top"));
        assert!(!is_route_path("/mi perfil"));
    }

    #[test]
    fn blank_fields_are_reported_in_declaration_order() {
        let entry = RouteEntry::new(1, " ", "", "home");
        let err = check_fields(0, &entry).expect_err("blank path");
        assert!(matches!(err, RegistryValidationError::MissingField { field: "path", .. }));

        let entry = RouteEntry::new(1, "/", "Home", "");
        let err = check_fields(4, &entry).expect_err("blank content");
        assert!(matches!(
            err,
            RegistryValidationError::MissingField { index: 4, field: "content", .. }
        ));
    }
}
