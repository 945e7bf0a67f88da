use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use shelf_dashboard::{App, AppContext};
use shelf_domain::config::WindowConfig;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for DesktopApp {
    fn from(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and mounts [`App`] with `app` as its root context.
    /// Blocks until the window closes.
    pub fn launch(self, app: AppContext) {
        info!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            concat!(
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
                r#"<script src="https://cdn.tailwindcss.com"></script>"#,
            )
            .into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(app).launch(App);
    }
}
