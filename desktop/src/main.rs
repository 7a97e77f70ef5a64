use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting wallet history tool (desktop)");

    let window = WindowBuilder::new().with_title("Wallet History Tool");
    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
