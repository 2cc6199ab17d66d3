use dioxus::prelude::*;
use redmine_core::{KeyValueStore, SERVER_URL_KEY};

use crate::{
    components::button::{Button, ButtonStyle},
    route::Route,
};

#[component]
pub fn Tickets() -> Element {
    let store: Signal<KeyValueStore> = use_context();
    let server_url = store
        .read()
        .value(SERVER_URL_KEY)
        .unwrap_or_default()
        .to_string();

    rsx! {
        div { class: "tickets-container",
            div { class: "tickets-header",
                h1 { "Tickets" }
                p { "Connected to {server_url}" }
            }
            div { class: "action-buttons",
                Button {
                    title: "Setup",
                    style: ButtonStyle::Secondary,
                    action: move |_| {
                        navigator().push(Route::Setup {});
                    },
                }
            }
        }
    }
}
