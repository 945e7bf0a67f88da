use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        h2 { "Bienvenido al Home" }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        h2 { "Esta es la página de Perfil" }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        h2 { "Configuración de usuario" }
    }
}
