use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod store;
mod utils;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#ff5500" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
