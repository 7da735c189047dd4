use crate::config;

/// Startup state handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
}
