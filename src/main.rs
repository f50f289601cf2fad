mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::DashboardConfig;
use crate::platform::desktop::paths::default_webview_data_dir;

fn main() {
    logging::init_logging();

    let webview_data_dir = match default_webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!("failed to prepare WebView2 data directory: {err:#}");
            std::process::exit(1);
        }
    };
    let config = DashboardConfig::from_env();
    tracing::info!(
        seed = config.coverage_seed,
        export_delay_ms = config.export_delay.as_millis() as u64,
        data_dir = %webview_data_dir.display(),
        "starting {}",
        config.title
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(config.title.clone()))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}
