//! Page catalog: the built-in route table and the mapping from content keys to views.

mod basic;
mod stock;

pub use self::basic::{Home, Profile, Settings};
pub use self::stock::{Header, MainStock, Stock};

use dioxus::prelude::*;
use shelf_domain::route::{ContentKey, RouteEntry};

/// Routes shown by the dashboard, in menu order.
pub const ROUTES: &[Option<RouteEntry>] = &[
    Some(RouteEntry::new(1, "/", "Home", Page::Home.key())),
    Some(RouteEntry::new(2, "/perfil", "Perfil", Page::Profile.key())),
    Some(RouteEntry::new(3, "/configuracion", "Configuración", Page::Settings.key())),
    Some(RouteEntry::new(4, "/stock", "Stock", Page::Stock.key())),
];

/// Every view a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Profile,
    Settings,
    Stock,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Profile, Self::Settings, Self::Stock];

    /// Content key used in route tables.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Stock => "stock",
        }
    }

    #[must_use]
    pub fn from_key(key: &ContentKey) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key.as_str())
    }
}

/// Renders one catalog page.
#[component]
pub fn PageContent(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::Profile => rsx! { Profile {} },
        Page::Settings => rsx! { Settings {} },
        Page::Stock => rsx! { Stock {} },
    }
}
