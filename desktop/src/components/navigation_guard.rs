use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use redmine_core::{evaluate, resolve, Action, KeyValueStore, Location};

use crate::route::Route;

/// Layout wrapping every route. Runs the setup guard against the store on
/// each navigation and either renders the matched page or replaces the
/// route with the one the guard asks for.
#[component]
pub fn NavigationGuard() -> Element {
    let store: Signal<KeyValueStore> = use_context();
    let route: Route = use_route();
    // Where the last allowed navigation ended, only used as the origin
    let last_location: Rc<RefCell<Option<Location>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let target = resolve(route.to_string());
    let action = evaluate(&target, last_location.borrow().as_ref(), &*store.read());

    match action {
        Action::Allow(location) => {
            last_location.replace(Some(location));
            rsx! {
                Outlet::<Route> {}
            }
        }
        Action::Redirect(path) => {
            match path.parse::<Route>() {
                Ok(redirect) => {
                    debug!("Redirecting {} to {}", route, redirect);
                    navigator().replace(redirect);
                }
                Err(e) => error!("Can't redirect to {}: {}", path, e),
            }
            rsx! {}
        }
    }
}
