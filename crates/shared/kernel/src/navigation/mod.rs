//! Location matching and the navigation state machine.
//!
//! [`resolve`] is a pure function from a location and a registry to either the
//! matching route or a [`RouteNotFound`]. [`Navigation`] wraps it with the only
//! mutable state the shell has: the current location.

mod location;

pub use self::location::Location;

use crate::registry::RouteRegistry;
use shelf_domain::route::RouteDescriptor;
use tracing::{debug, warn};

/// No registered route matches the location. Recovered by rendering the fallback view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route matches '{location}'")]
pub struct RouteNotFound {
    pub location: Location,
}

/// Outcome of matching one location against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Resolved { index: usize, route: &'a RouteDescriptor },
    NotFound(RouteNotFound),
}

impl<'a> Resolution<'a> {
    #[must_use]
    pub const fn route(&self) -> Option<&'a RouteDescriptor> {
        match self {
            Self::Resolved { route, .. } => Some(*route),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RouteState {
        match self {
            Self::Resolved { index, .. } => RouteState::Resolved { index: *index },
            Self::NotFound(_) => RouteState::NotFound,
        }
    }
}

/// Selects the first route whose path equals the location's path exactly.
#[must_use]
pub fn resolve<'a>(location: &Location, registry: &'a RouteRegistry) -> Resolution<'a> {
    registry.find_by_path(location.path()).map_or_else(
        || Resolution::NotFound(RouteNotFound { location: location.clone() }),
        |(index, route)| Resolution::Resolved { index, route },
    )
}

/// Router state. There is no loading state: matching is local and synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteState {
    /// Index into [`RouteRegistry::list`].
    Resolved { index: usize },
    NotFound,
}

/// What a single navigation event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: RouteState,
    pub current: RouteState,
    /// `false` when the event carried the location the router was already at.
    pub changed: bool,
}

/// The long-lived mapping from the current location to the rendered route.
///
/// Navigation events are applied one at a time through [`Navigation::navigate`];
/// each re-evaluates [`resolve`] against the same registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    registry: RouteRegistry,
    location: Location,
    state: RouteState,
}

impl Navigation {
    /// Starts at `initial`, resolving it immediately.
    pub fn new(registry: RouteRegistry, initial: impl Into<Location>) -> Self {
        let location = initial.into();
        let state = resolve(&location, &registry).state();
        if state == RouteState::NotFound {
            warn!(location = %location, "Initial location matches no route");
        }
        Self { registry, location, state }
    }

    /// Applies a navigation event.
    pub fn navigate(&mut self, to: impl Into<Location>) -> Transition {
        let to = to.into();
        let previous = self.state;

        if to == self.location {
            return Transition { previous, current: previous, changed: false };
        }

        let state = resolve(&to, &self.registry).state();
        match state {
            RouteState::Resolved { index } => {
                debug!(from = %self.location, to = %to, index, "Navigated");
            },
            RouteState::NotFound => warn!(from = %self.location, to = %to, "No route for location"),
        }

        self.location = to;
        self.state = state;
        Transition { previous, current: state, changed: true }
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub const fn state(&self) -> RouteState {
        self.state
    }

    #[must_use]
    pub const fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The route being displayed, if any.
    #[must_use]
    pub fn current(&self) -> Option<&RouteDescriptor> {
        match self.state {
            RouteState::Resolved { index } => self.registry.get(index),
            RouteState::NotFound => None,
        }
    }

    /// Current state as a [`Resolution`], carrying the not-found location for the fallback view.
    #[must_use]
    pub fn resolution(&self) -> Resolution<'_> {
        if let RouteState::Resolved { index } = self.state
            && let Some(route) = self.registry.get(index)
        {
            return Resolution::Resolved { index, route };
        }
        Resolution::NotFound(RouteNotFound { location: self.location.clone() })
    }
}
