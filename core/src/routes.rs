use std::fmt::Display;

pub const TICKETS_PATH: &str = "/";
pub const SETUP_PATH: &str = "/setup";

/// The views a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Tickets,
    Setup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Entering the route needs the server URL and API token to be set.
    pub requires_setup: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub screen: Screen,
    pub meta: RouteMeta,
}

/// Every route the app knows about, in matching order.
pub static ROUTES: [RouteRecord; 2] = [
    RouteRecord {
        path: TICKETS_PATH,
        name: "Tickets",
        screen: Screen::Tickets,
        meta: RouteMeta {
            requires_setup: true,
        },
    },
    RouteRecord {
        path: SETUP_PATH,
        name: "Setup",
        screen: Screen::Setup,
        meta: RouteMeta {
            requires_setup: false,
        },
    },
];

/// A navigation target once it has been matched against [`ROUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    matched: Vec<&'static RouteRecord>,
}

impl Location {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The records matched on the way to this location, outermost first.
    /// Empty when the path doesn't match any route.
    pub fn matched(&self) -> &[&'static RouteRecord] {
        &self.matched
    }

    /// The innermost matched record, the one that owns the screen.
    pub fn record(&self) -> Option<&'static RouteRecord> {
        self.matched.last().copied()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.record().map(|record| record.name)
    }

    pub fn screen(&self) -> Option<Screen> {
        self.record().map(|record| record.screen)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.path, name),
            None => write!(f, "{} (unmatched)", self.path),
        }
    }
}

/// Drops the query and fragment, makes sure there's a leading slash and
/// removes trailing ones, so `"setup/?x=1"` becomes `"/setup"`.
pub fn normalize_path<S: AsRef<str>>(path: S) -> String {
    let path = path.as_ref();
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim().trim_end_matches('/');
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

pub fn resolve<S: AsRef<str>>(path: S) -> Location {
    let path = normalize_path(path);
    let matched = ROUTES
        .iter()
        .filter(|record| record.path == path)
        .collect();
    Location { path, matched }
}

pub fn find_by_name<S: AsRef<str>>(name: S) -> Option<&'static RouteRecord> {
    ROUTES.iter().find(|record| record.name == name.as_ref())
}

pub fn find_by_screen(screen: Screen) -> Option<&'static RouteRecord> {
    ROUTES.iter().find(|record| record.screen == screen)
}
