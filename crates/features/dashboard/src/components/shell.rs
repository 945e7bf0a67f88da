use super::Dashboard;
use crate::context::AppContext;
use dioxus::prelude::*;
use shelf_kernel::api::ApiEndpoint;
use shelf_kernel::registry::RouteRegistry;

/// Launch root. Reads the [`AppContext`] injected by the launcher once and passes
/// its parts down explicitly.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        Shell {
            api: ctx.api,
            registry: ctx.registry,
            initial_location: ctx.initial_location.to_string(),
        }
    }
}

/// The visible application: API banner above the dashboard.
#[component]
pub fn Shell(api: ApiEndpoint, registry: RouteRegistry, initial_location: String) -> Element {
    let base_url = api.base_url().to_owned();

    rsx! {
        div {
            h3 { "Api : {base_url}" }
            Dashboard { registry, initial_location }
        }
    }
}
