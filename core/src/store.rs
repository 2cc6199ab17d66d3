use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{ConfigProvider, API_TOKEN_KEY, SERVER_URL_KEY};
use crate::error::StoreError;
use crate::guard::is_setup_complete;

#[cfg(debug_assertions)]
const BASE_STORE_FILE: &str = ".redmine_desktop_debug.toml";
#[cfg(not(debug_assertions))]
const BASE_STORE_FILE: &str = ".redmine_desktop.toml";

/// String to string storage kept in a TOML file, the desktop version of the
/// browser's local storage.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct KeyValueStore {
    values: BTreeMap<String, String>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl KeyValueStore {
    /// A store that lives only in memory, saving it fails.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn default_path() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir();
        match home {
            Some(directory) => Ok(directory.join(BASE_STORE_FILE)),
            None => Err(StoreError::HomeNotFound),
        }
    }

    pub fn load_from_disk() -> Result<Self, StoreError> {
        Self::load_from(Self::default_path()?)
    }

    /// Loads the store at `path`, creating an empty one if the file is not
    /// there yet.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("No store found at {:?}, creating an empty one", path);
            let store = Self {
                values: BTreeMap::new(),
                path: Some(path.to_path_buf()),
            };
            store.save_to_disk()?;
            Ok(store)
        } else {
            let toml = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let mut store: Self = toml::from_str(&toml)?;
            store.path = Some(path.to_path_buf());
            Ok(store)
        }
    }

    pub fn save_to_disk(&self) -> Result<(), StoreError> {
        let path = self.path.as_ref().ok_or(StoreError::NotPersisted)?;
        debug!("Saving store to {:?}", path);
        let toml = toml::to_string(&self)?;
        std::fs::write(path, toml).map_err(|source| StoreError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn value<S: AsRef<str>>(&self, key: S) -> Option<&str> {
        self.values.get(key.as_ref()).map(String::as_str)
    }

    // Remember to save the store to persist the change
    pub fn set<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) {
        self.values
            .insert(key.as_ref().to_string(), value.as_ref().to_string());
    }

    pub fn remove<S: AsRef<str>>(&mut self, key: S) -> Option<String> {
        self.values.remove(key.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigProvider for KeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key).map(str::to_string)
    }
}

/// Opens the default store. A broken store behaves as an unconfigured app,
/// see [`load_or_empty_from`].
pub fn load_or_empty() -> KeyValueStore {
    match KeyValueStore::default_path() {
        Ok(path) => load_or_empty_from(path),
        Err(e) => {
            warn!("No place to keep the store, using memory only: {}", e);
            KeyValueStore::in_memory()
        }
    }
}

/// Opens the store at `path`, falling back to an empty one when it can't be
/// read. The empty store stays bound to `path`, so saving it replaces the
/// broken file.
pub fn load_or_empty_from<P: AsRef<Path>>(path: P) -> KeyValueStore {
    let path = path.as_ref();
    KeyValueStore::load_from(path).unwrap_or_else(|e| {
        warn!("Can't load the store, starting with an empty one: {}", e);
        KeyValueStore {
            values: BTreeMap::new(),
            path: Some(path.to_path_buf()),
        }
    })
}

/// The two values the setup screen edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupValues {
    pub server_url: String,
    pub api_token: String,
}

impl SetupValues {
    pub fn read_from<C: ConfigProvider>(config: &C) -> Self {
        Self {
            server_url: config.get(SERVER_URL_KEY).unwrap_or_default(),
            api_token: config.get(API_TOKEN_KEY).unwrap_or_default(),
        }
    }

    pub fn write_to(&self, store: &mut KeyValueStore) {
        store.set(SERVER_URL_KEY, &self.server_url);
        store.set(API_TOKEN_KEY, &self.api_token);
    }

    pub fn is_complete(&self) -> bool {
        is_setup_complete(self)
    }
}

impl ConfigProvider for SetupValues {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            SERVER_URL_KEY => Some(self.server_url.clone()),
            API_TOKEN_KEY => Some(self.api_token.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{API_TOKEN_KEY, SERVER_URL_KEY};
    use crate::error::StoreError;
    use crate::guard::is_setup_complete;

    use super::{load_or_empty_from, KeyValueStore, SetupValues};

    #[test]
    fn creates_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.toml");

        let store = KeyValueStore::load_from(&path)?;
        assert!(store.is_empty());
        assert!(path.exists());
        assert_eq!(Some(path.as_path()), store.path());
        Ok(())
    }

    #[test]
    fn persists_values() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.toml");

        let mut store = KeyValueStore::load_from(&path)?;
        store.set(SERVER_URL_KEY, "https://redmine.example.com");
        store.set(API_TOKEN_KEY, "abc123");
        store.save_to_disk()?;

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("serverURL = \"https://redmine.example.com\""));

        let reloaded = KeyValueStore::load_from(&path)?;
        assert_eq!(Some("https://redmine.example.com"), reloaded.value(SERVER_URL_KEY));
        assert_eq!(Some("abc123"), reloaded.value(API_TOKEN_KEY));
        assert!(is_setup_complete(&reloaded));
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "serverURL = [1, 2")?;

        let result = KeyValueStore::load_from(&path);
        assert!(matches!(result, Err(StoreError::Deserialize(_))));
        Ok(())
    }

    #[test]
    fn broken_file_is_replaced_on_save() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "serverURL = [1, 2")?;

        let mut store = load_or_empty_from(&path);
        assert!(store.is_empty());
        assert!(!is_setup_complete(&store));
        assert_eq!(Some(path.as_path()), store.path());

        let values = SetupValues {
            server_url: "https://example.com".to_string(),
            api_token: "abc123".to_string(),
        };
        values.write_to(&mut store);
        store.save_to_disk()?;

        let reloaded = KeyValueStore::load_from(&path)?;
        assert_eq!(values, SetupValues::read_from(&reloaded));
        Ok(())
    }

    #[test]
    fn in_memory_store_is_not_saved() {
        let mut store = KeyValueStore::in_memory();
        store.set(SERVER_URL_KEY, "https://example.com");

        assert!(matches!(
            store.save_to_disk(),
            Err(StoreError::NotPersisted)
        ));
        assert_eq!(Some("https://example.com"), store.value(SERVER_URL_KEY));
    }

    #[test]
    fn remove_value() {
        let mut store = KeyValueStore::in_memory();
        store.set(API_TOKEN_KEY, "abc123");

        assert_eq!(Some("abc123".to_string()), store.remove(API_TOKEN_KEY));
        assert_eq!(None, store.value(API_TOKEN_KEY));
        assert!(store.is_empty());
    }

    #[test]
    fn setup_values() {
        let mut store = KeyValueStore::in_memory();
        let values = SetupValues::read_from(&store);
        assert_eq!(SetupValues::default(), values);
        assert!(!values.is_complete());

        let values = SetupValues {
            server_url: "https://example.com".to_string(),
            api_token: "abc123".to_string(),
        };
        values.write_to(&mut store);

        assert!(values.is_complete());
        assert!(is_setup_complete(&store));

        let half_done = SetupValues {
            api_token: String::new(),
            ..values.clone()
        };
        assert!(!half_done.is_complete());
        assert_eq!(values, SetupValues::read_from(&store));
    }
}
