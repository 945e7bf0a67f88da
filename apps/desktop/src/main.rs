use anyhow::Context;
use shelf_dashboard::AppContext;
use shelf_desktop::DesktopApp;
use shelf_kernel::config::{config_path, load_client_config};
use shelf_logger::Logger;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let path = config_path(None);
    let config = load_client_config(Some(path)).context("Failed to load configuration")?;

    // Logger settings come from the config file.
    let _logger = Logger::builder()
        .apply(&config.log)?
        .name(env!("CARGO_PKG_NAME"))
        .init()
        .context("Failed to initialize logger")?;

    info!(
        path = %path.display(),
        api = %config.api.base_url,
        initial = %config.navigation.initial_location,
        "Configuration loaded"
    );

    let app = AppContext::bootstrap(&config).context("Failed to bootstrap the dashboard")?;

    DesktopApp::from(&config.window).launch(app);

    Ok(())
}
