//! Kernel of the Shelf navigation shell.
//! Everything here is UI-agnostic: the dashboard crate renders what these types decide.
//!
//! * [`registry`]: the validated, immutable route registry.
//! * [`navigation`]: location matching and the navigation state machine.
//! * [`menu`]: projection of the registry into menu items.
//! * [`api`]: the process-wide API endpoint value.
//! * [`config`]: layered configuration loading (file + `SHELF__*` environment).
//!
//! ## Example
//! ```rust
//! use shelf_kernel::domain::route::RouteEntry;
//! use shelf_kernel::navigation::{Navigation, RouteState};
//! use shelf_kernel::registry::RouteRegistry;
//!
//! let registry = RouteRegistry::from_table(&[
//!     Some(RouteEntry::new(1, "/", "Home", "home")),
//!     Some(RouteEntry::new(2, "/perfil", "Perfil", "profile")),
//! ])
//! .unwrap();
//!
//! let mut nav = Navigation::new(registry, "/");
//! nav.navigate("/perfil");
//! assert_eq!(nav.state(), RouteState::Resolved { index: 1 });
//! ```

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod menu;
pub mod navigation;
pub mod prelude;
pub mod registry;

pub use shelf_domain as domain;
