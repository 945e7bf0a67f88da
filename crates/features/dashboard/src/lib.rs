//! Dashboard feature slice.
//!
//! Wires the kernel's registry, navigation and API endpoint into a Dioxus tree:
//!
//! ```text
//! App ─ Shell ─┬─ API banner
//!              └─ Dashboard ─┬─ Menu
//!                            └─ PageView ─ PageContent | NotFound
//! ```
//!
//! [`AppContext::bootstrap`] is the composition root. Below [`App`] every value is
//! passed down as a prop; nothing reads ambient state.

pub mod components;
mod context;
mod error;
pub mod pages;

pub use crate::components::{App, Dashboard, Menu, NotFound, PageView, Shell};
pub use crate::context::AppContext;
pub use crate::error::{BootstrapError, BootstrapErrorExt};
