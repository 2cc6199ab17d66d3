#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod components;
mod pages;
mod route;

use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;
use redmine_core::KeyValueStore;

use crate::route::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::DEBUG) {
        eprintln!("Can't start the logger: {}", e);
    }
    info!("Starting app");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // A store that can't be loaded is treated as an empty one, the guard
    // will send the user to the setup screen
    use_context_provider(|| {
        let store: KeyValueStore = redmine_core::load_or_empty();
        Signal::new(store)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
