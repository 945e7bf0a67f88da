use super::NotFound;
use crate::pages::{Page, PageContent};
use dioxus::prelude::*;
use shelf_domain::route::ContentKey;
use tracing::warn;

/// Renders the resolved route's content, or the fallback view.
///
/// `content` is `None` when no route matches `location`.
#[component]
pub fn PageView(content: Option<ContentKey>, location: String) -> Element {
    match content.as_ref().and_then(Page::from_key) {
        Some(page) => rsx! {
            PageContent { page }
        },
        None => {
            if let Some(key) = &content {
                warn!(%key, %location, "Route content has no page, showing fallback");
            }
            rsx! {
                NotFound { location }
            }
        },
    }
}
