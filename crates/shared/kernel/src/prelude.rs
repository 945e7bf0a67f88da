pub use crate::api::{ApiEndpoint, ApiEndpointError};
pub use crate::menu::MenuItem;
pub use crate::navigation::{Location, Navigation, Resolution, RouteNotFound, RouteState, Transition};
pub use crate::registry::{RegistryValidationError, RouteRegistry};
pub use shelf_domain::route::{ContentKey, RouteDescriptor, RouteEntry};
