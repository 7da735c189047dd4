use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Keyword Importer")
        .with_always_on_top(false)
        .with_resizable(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(640, 720))
}
