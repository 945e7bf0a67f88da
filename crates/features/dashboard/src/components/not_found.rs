use dioxus::prelude::*;

/// Fallback view for locations that match no route.
#[component]
pub fn NotFound(location: String) -> Element {
    rsx! {
        section { class: "text-center",
            h2 { class: "text-xl font-bold", "Página no encontrada" }
            p { class: "text-gray-500", "No hay ninguna ruta registrada para {location}" }
        }
    }
}
