pub mod config;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod routes;
pub mod store;

pub use config::{ConfigProvider, API_TOKEN_KEY, SERVER_URL_KEY};
pub use guard::{evaluate, is_setup_complete, Action};
pub use navigator::Navigator;
pub use routes::{resolve, Location, RouteMeta, RouteRecord, Screen, ROUTES, SETUP_PATH};
pub use store::{load_or_empty, load_or_empty_from, KeyValueStore, SetupValues};
