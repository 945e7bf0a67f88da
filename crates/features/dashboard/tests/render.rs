use dioxus::dioxus_core::VirtualDom;
use shelf_dashboard::components::ShellProps;
use shelf_dashboard::{AppContext, Shell};
use shelf_domain::config::{ClientConfig, ClientConfigInner};

fn render(initial_location: &str) -> String {
    let ctx = AppContext::bootstrap(&ClientConfig::from(ClientConfigInner::default()))
        .expect("bootstrap");
    let props = ShellProps {
        api: ctx.api,
        registry: ctx.registry,
        initial_location: initial_location.to_owned(),
    };
    let mut dom = VirtualDom::new_with_props(Shell, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// `href` values of every link, in document order.
fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"").skip(1).filter_map(|rest| rest.split('"').next()).collect()
}

/// The opening `<a ...>` tag that links to `href`.
fn link_tag<'a>(html: &'a str, href: &str) -> Option<&'a str> {
    let needle = format!("href=\"{href}\"");
    html.split("<a ").skip(1).filter_map(|tag| tag.split('>').next()).find(|tag| tag.contains(&needle))
}

#[test]
fn matching_location_renders_only_its_page() {
    let html = render("/perfil");

    assert!(html.contains("Esta es la página de Perfil"), "{html}");
    assert!(!html.contains("Bienvenido al Home"), "{html}");
    assert!(!html.contains("Página no encontrada"), "{html}");
    assert!(html.contains("Api : http://localhost:5000/api"), "{html}");
}

#[test]
fn active_link_is_marked_current() {
    let html = render("/perfil");

    let perfil = link_tag(&html, "/perfil").expect("perfil link");
    assert!(perfil.contains("aria-current=\"page\""), "{perfil}");
    assert_eq!(html.matches("aria-current").count(), 1, "{html}");
}

#[test]
fn unknown_location_renders_fallback_and_full_menu() {
    let html = render("/nowhere");

    assert!(html.contains("Página no encontrada"), "{html}");
    assert!(html.contains("/nowhere"), "{html}");
    assert_eq!(hrefs(&html), ["/", "/perfil", "/configuracion", "/stock"]);
    assert!(!html.contains("aria-current"), "{html}");
}

#[test]
fn stock_route_renders_inventory() {
    let html = render("/stock?tab=all");

    assert!(html.contains("Inventario"), "{html}");
    assert!(html.contains("No hay productos cargados."), "{html}");
    assert_eq!(hrefs(&html).len(), 4);
}
