use log::debug;

use crate::config::{ConfigProvider, API_TOKEN_KEY, SERVER_URL_KEY};
use crate::routes::{Location, SETUP_PATH};

/// What the host should do with a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Carry on to the requested location.
    Allow(Location),
    /// Go to this path instead.
    Redirect(String),
}

impl Action {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Action::Allow(_))
    }

    /// The path the navigation ends up at.
    pub fn destination(&self) -> &str {
        match self {
            Action::Allow(location) => location.path(),
            Action::Redirect(path) => path,
        }
    }
}

fn has_value<C: ConfigProvider>(config: &C, key: &str) -> bool {
    config.get(key).is_some_and(|value| !value.is_empty())
}

/// The app is usable once both the server URL and the API token are set.
/// Only presence is checked, the values themselves are not validated.
pub fn is_setup_complete<C: ConfigProvider>(config: &C) -> bool {
    has_value(config, SERVER_URL_KEY) && has_value(config, API_TOKEN_KEY)
}

/// Runs before every navigation. Sends the user to the setup screen when
/// the target needs a configured server and there isn't one.
///
/// Doesn't write anything and keeps no state between calls, so the same
/// target and store contents always give the same [`Action`].
pub fn evaluate<C: ConfigProvider>(
    target: &Location,
    origin: Option<&Location>,
    config: &C,
) -> Action {
    let requires_setup = target
        .matched()
        .iter()
        .any(|record| record.meta.requires_setup);

    if requires_setup && !is_setup_complete(config) {
        debug!(
            "Setup incomplete, redirecting {} to {} (from {:?})",
            target,
            SETUP_PATH,
            origin.map(Location::path)
        );
        Action::Redirect(SETUP_PATH.to_string())
    } else {
        debug!("Navigating to {}", target);
        Action::Allow(target.clone())
    }
}
