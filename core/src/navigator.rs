use log::debug;

use crate::config::ConfigProvider;
use crate::guard::{evaluate, Action};
use crate::routes::{resolve, Location};

/// Keeps track of where the app is and runs the guard on every move.
///
/// The guard only answers allow or redirect, the navigator is the one that
/// follows the answer. Redirects always point at the setup screen, which
/// never asks for setup itself, so a single hop is all it takes.
#[derive(Debug)]
pub struct Navigator<C: ConfigProvider> {
    config: C,
    current: Option<Location>,
    history: Vec<Location>,
}

impl<C: ConfigProvider> Navigator<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            current: None,
            history: vec![],
        }
    }

    pub fn push<S: AsRef<str>>(&mut self, path: S) -> &Location {
        let target = resolve(path);
        let location = match evaluate(&target, self.current.as_ref(), &self.config) {
            Action::Allow(location) => location,
            Action::Redirect(redirect) => {
                debug!("Following redirect from {} to {}", target, redirect);
                resolve(redirect)
            }
        };

        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        self.current.insert(location)
    }

    pub fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    /// Locations visited before the current one, oldest first.
    pub fn history(&self) -> &[Location] {
        &self.history
    }

    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }
}
