use dioxus::prelude::*;
use shelf_kernel::menu::MenuItem;

const LINK: &str = "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600";
const LINK_ACTIVE: &str = "px-4 py-2 bg-blue-700 text-white rounded";

/// Navigation bar: one link per menu item, in the order given.
#[component]
pub fn Menu(items: Vec<MenuItem>, on_navigate: EventHandler<String>) -> Element {
    let links = items.into_iter().map(|item| {
        let key = item.key;
        rsx! {
            MenuLink { key: "{key}", item, on_navigate }
        }
    });

    rsx! {
        nav { class: "p-4 border-b",
            ul { class: "flex space-x-4", {links} }
        }
    }
}

#[component]
fn MenuLink(item: MenuItem, on_navigate: EventHandler<String>) -> Element {
    let class = if item.active { LINK_ACTIVE } else { LINK };
    let href = item.target.to_string();
    let target = href.clone();
    let label = item.label.to_string();

    rsx! {
        li {
            a {
                class,
                href: "{href}",
                aria_current: if item.active { "page" },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(target.clone());
                },
                "{label}"
            }
        }
    }
}
