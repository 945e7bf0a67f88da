use super::{Menu, PageView};
use dioxus::prelude::*;
use shelf_domain::route::ContentKey;
use shelf_kernel::menu::{self, MenuItem};
use shelf_kernel::navigation::Navigation;
use shelf_kernel::registry::RouteRegistry;

/// Menu and page router side by side, both fed from one registry.
///
/// Owns the only piece of mutable UI state: the [`Navigation`] machine.
#[component]
pub fn Dashboard(registry: RouteRegistry, initial_location: String) -> Element {
    let mut navigation =
        use_signal(|| Navigation::new(registry.clone(), initial_location.clone()));

    let DashboardView { items, content, location } = DashboardView::from(&*navigation.read());

    rsx! {
        div { class: "h-screen",
            Menu {
                items,
                on_navigate: move |target: String| {
                    navigation.write().navigate(target);
                },
            }
            main { class: "p-4",
                PageView { content, location }
            }
        }
    }
}

/// Props for the menu and the page view, taken from one navigation snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DashboardView {
    items: Vec<MenuItem>,
    content: Option<ContentKey>,
    location: String,
}

impl From<&Navigation> for DashboardView {
    fn from(nav: &Navigation) -> Self {
        Self {
            items: menu::items(nav.registry(), nav.location()),
            content: nav.current().map(|route| route.content.clone()),
            location: nav.location().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ROUTES;

    fn navigation(initial: &'static str) -> Navigation {
        let registry = RouteRegistry::from_table(ROUTES).expect("built-in table");
        Navigation::new(registry, initial)
    }

    fn active(view: &DashboardView) -> Vec<&str> {
        view.items.iter().filter(|item| item.active).map(|item| item.target.as_ref()).collect()
    }

    #[test]
    fn initial_view_shows_home() {
        let view = DashboardView::from(&navigation("/"));

        assert_eq!(view.content.as_ref().map(ContentKey::as_str), Some("home"));
        assert_eq!(view.location, "/");
        assert_eq!(active(&view), ["/"]);
    }

    #[test]
    fn menu_click_moves_content_and_highlight() {
        let mut nav = navigation("/");
        // Same call the menu's `on_navigate` handler makes.
        let transition = nav.navigate("/stock".to_owned());
        assert!(transition.changed);

        let view = DashboardView::from(&nav);
        assert_eq!(view.content.as_ref().map(ContentKey::as_str), Some("stock"));
        assert_eq!(view.location, "/stock");
        assert_eq!(active(&view), ["/stock"]);
        assert_eq!(view.items.len(), 4);
    }

    #[test]
    fn unknown_location_keeps_full_menu() {
        let mut nav = navigation("/perfil");
        nav.navigate("/nowhere".to_owned());

        let view = DashboardView::from(&nav);
        assert_eq!(view.content, None);
        assert_eq!(view.location, "/nowhere");
        assert!(active(&view).is_empty());

        let targets: Vec<_> = view.items.iter().map(|item| item.target.as_ref()).collect();
        assert_eq!(targets, ["/", "/perfil", "/configuracion", "/stock"]);
    }
}
