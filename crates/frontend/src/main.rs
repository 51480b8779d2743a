mod app;
mod auth;
mod hooks;
mod pages;
mod routes;
mod storage;

use app::{App, AppProps};
use auth::SessionHandle;
use jobboard_core::AppConfig;
use jobboard_session::AuthSessionManager;
use storage::BrowserStorage;
use tracing::{error, info};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Invalid API configuration");
            return;
        }
    };
    info!(api_url = config.api_url(), "Starting job board client");

    let manager = match AuthSessionManager::new(&config, BrowserStorage) {
        Ok(manager) => manager,
        Err(err) => {
            error!(error = %err, "Failed to build API client");
            return;
        }
    };
    manager.initialize();

    yew::Renderer::<App>::with_props(AppProps {
        manager: SessionHandle::new(manager),
    })
    .render();
}
