use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use redmine_core::{KeyValueStore, SetupValues};

use crate::{components::button::Button, route::Route};

#[component]
pub fn Setup() -> Element {
    let mut store: Signal<KeyValueStore> = use_context();
    let mut values = use_signal(|| SetupValues::read_from(&*store.peek()));
    let mut save_error: Signal<Option<String>> = use_signal(|| None);

    rsx! {
        div { class: "setup-container",
            div { class: "setup-header",
                h1 { "Setup" }
                p { "Connect to your Redmine server" }
            }
            div { class: "setup-content",
                div { class: "form-group",
                    label { class: "form-label", r#for: "server-url", "Server URL" }
                    input {
                        id: "server-url",
                        class: "form-input",
                        r#type: "url",
                        placeholder: "https://redmine.example.com",
                        value: "{values.read().server_url}",
                        oninput: move |e| values.write().server_url = e.value(),
                    }
                    div { class: "description", "Address of the Redmine instance to read tickets from" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "api-token", "API Token" }
                    input {
                        id: "api-token",
                        class: "form-input",
                        r#type: "password",
                        value: "{values.read().api_token}",
                        oninput: move |e| values.write().api_token = e.value(),
                    }
                    div { class: "description", "Found under \"My account\" in Redmine" }
                }
                if let Some(message) = save_error() {
                    div { class: "error", "{message}" }
                }
                div { class: "action-buttons",
                    Button {
                        title: "Save and Continue",
                        disabled: !values.read().is_complete(),
                        action: move |_| {
                            let saved = save_setup(&store.read(), &values.read());
                            match saved {
                                Ok(updated) => {
                                    debug!("Setup saved");
                                    store.set(updated);
                                    save_error.set(None);
                                    navigator().replace(Route::Tickets {});
                                }
                                Err(e) => {
                                    error!("Error saving the setup: {}", e);
                                    save_error.set(Some(format!("Can't save the setup: {}", e)));
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

// The shared store is only replaced once the values are on disk
fn save_setup(store: &KeyValueStore, values: &SetupValues) -> anyhow::Result<KeyValueStore> {
    let mut updated = store.clone();
    values.write_to(&mut updated);
    updated.save_to_disk()?;
    Ok(updated)
}
