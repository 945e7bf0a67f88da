use dioxus::prelude::*;

#[component]
pub fn Stock() -> Element {
    rsx! {
        div {
            Header {}
            div { class: "p-4",
                h1 { class: "text-2xl font-bold text-gray-800", "Stock" }
                MainStock {}
            }
        }
    }
}

/// Section header shared by inventory pages.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "px-4 py-2 bg-gray-100 border-b",
            span { class: "text-sm font-semibold uppercase text-gray-600", "Inventario" }
        }
    }
}

/// Stock listing. Empty until the API collaborator is wired in.
#[component]
pub fn MainStock() -> Element {
    rsx! {
        section { class: "mt-4",
            table { class: "min-w-full text-left",
                thead {
                    tr {
                        th { class: "px-2", "Producto" }
                        th { class: "px-2", "Cantidad" }
                    }
                }
                tbody {}
            }
            p { class: "mt-2 text-gray-500", "No hay productos cargados." }
        }
    }
}
