#![allow(non_snake_case)]

use dioxus::prelude::*;
use redmine_core::routes::find_by_screen;
use redmine_core::{RouteRecord, Screen};

use crate::components::navigation_guard::NavigationGuard;
use crate::pages::setup::Setup;
use crate::pages::tickets::Tickets;

/// An enum of all of the possible routes in the app.
///
/// Every route sits under the [`NavigationGuard`] layout, so the guard runs
/// on each navigation, whatever the target.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationGuard)]
        #[route("/")]
        Tickets {},
        #[route("/setup")]
        Setup {},
}

impl Route {
    pub fn screen(&self) -> Screen {
        match self {
            Route::Tickets {} => Screen::Tickets,
            Route::Setup {} => Screen::Setup,
        }
    }

    pub fn record(&self) -> Option<&'static RouteRecord> {
        find_by_screen(self.screen())
    }
}
