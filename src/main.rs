use protobot::config::{AppConfig, load_bundled_env};

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_dotenv() -> Result<(), dotenvy::Error> {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return Ok(());
    }

    load_bundled_env(BUNDLED_CONFIG)
}

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("invalid configuration, using defaults: {err}");
            AppConfig::default()
        }
    }
}

fn main() {
    // Logging reads RUST_LOG, so the environment is loaded first.
    let dotenv = load_dotenv();
    protobot::logging::init();
    if let Err(err) = dotenv {
        tracing::warn!("ignoring bundled config: {err}");
    }
    let config = load_config();
    tracing::info!(theme = ?config.theme, "starting Proto Bot");
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(protobot::ui::App);
}
