use std::collections::HashMap;

/// Key holding the base URL of the Redmine server.
pub const SERVER_URL_KEY: &str = "serverURL";
/// Key holding the user's Redmine API token.
pub const API_TOKEN_KEY: &str = "apiToken";

/// Read access to the persisted configuration values.
///
/// Implementations return `None` both when a key is missing and when the
/// backing storage can't be read, callers can't tell the two apart.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

// A missing provider behaves as an empty one
impl<T: ConfigProvider> ConfigProvider for Option<T> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|provider| provider.get(key))
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ConfigProvider, API_TOKEN_KEY, SERVER_URL_KEY};

    fn read<C: ConfigProvider>(config: C, key: &str) -> Option<String> {
        config.get(key)
    }

    fn provider() -> HashMap<String, String> {
        HashMap::from([(SERVER_URL_KEY.to_string(), "https://example.com".to_string())])
    }

    #[test]
    fn reads_through_references() {
        let config = provider();

        assert_eq!(
            Some("https://example.com".to_string()),
            read(&config, SERVER_URL_KEY)
        );
        assert_eq!(None, read(&config, API_TOKEN_KEY));
    }

    #[test]
    fn missing_provider_has_no_values() {
        let config: Option<HashMap<String, String>> = None;
        assert_eq!(None, read(&config, SERVER_URL_KEY));

        let config = Some(provider());
        assert!(read(&config, SERVER_URL_KEY).is_some());
    }
}
