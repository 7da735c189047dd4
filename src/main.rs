use kwimport::config::Config;
use kwimport::ui::{make_config, App, AppContext};
use tracing::info;

fn main() {
    // RUST_LOG wins, otherwise info
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!(
        "Starting keyword importer (database {}, collection {})",
        config.database, config.collection
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(AppContext { config })
        .launch(App);
}
