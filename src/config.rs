//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::locale::Locale;

/// Default remote service used by the hosted web client.
pub const DEFAULT_BASE_URL: &str = "https://sweet-stillness-production.up.railway.app";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the onboarding/chat service, without a trailing slash.
    pub base_url: String,
    /// Path of the JSON file holding the persisted session flags.
    pub state_path: PathBuf,
    /// Language for the fixed user-facing messages.
    pub locale: Locale,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Whether to ask `/profile/status` before starting onboarding.
    pub check_profile: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            state_path: default_state_path(),
            locale: Locale::default(),
            request_timeout: Duration::from_secs(30),
            check_profile: true,
        }
    }
}

impl ClientConfig {
    /// Build from `MORVO_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Used by `from_env` and tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("MORVO_BASE_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: "MORVO_BASE_URL".into(),
                    message: format!("expected an http(s) URL, got {url:?}"),
                });
            }
            config.base_url = url;
        }

        if let Some(path) = lookup("MORVO_STATE_PATH") {
            config.state_path = PathBuf::from(path);
        }

        if let Some(locale) = lookup("MORVO_LOCALE") {
            config.locale = locale.parse().map_err(|message| ConfigError::InvalidValue {
                key: "MORVO_LOCALE".into(),
                message,
            })?;
        }

        if let Some(secs) = lookup("MORVO_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "MORVO_REQUEST_TIMEOUT_SECS".into(),
                message: format!("{e}"),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "MORVO_REQUEST_TIMEOUT_SECS".into(),
                    message: "timeout must be at least 1 second".into(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(flag) = lookup("MORVO_CHECK_PROFILE") {
            config.check_profile = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "MORVO_CHECK_PROFILE".into(),
                        message: format!("expected a boolean, got {other:?}"),
                    });
                }
            };
        }

        Ok(config)
    }
}

fn default_state_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".morvo/state.json")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.check_profile);
        assert!(config.state_path.ends_with(".morvo/state.json"));
        assert_eq!(DEFAULT_LOG_FILTER, "info");
    }

    #[test]
    fn overrides_are_applied() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("MORVO_BASE_URL", "http://localhost:8000/"),
            ("MORVO_STATE_PATH", "/tmp/morvo.json"),
            ("MORVO_LOCALE", "en"),
            ("MORVO_REQUEST_TIMEOUT_SECS", "5"),
            ("MORVO_CHECK_PROFILE", "no"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.state_path, PathBuf::from("/tmp/morvo.json"));
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(!config.check_profile);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ClientConfig::from_lookup(lookup_from(&[("MORVO_BASE_URL", "ftp://x")]))
            .unwrap_err();
        assert!(err.to_string().contains("MORVO_BASE_URL"));
    }

    #[test]
    fn rejects_bad_timeout_and_flag() {
        assert!(
            ClientConfig::from_lookup(lookup_from(&[("MORVO_REQUEST_TIMEOUT_SECS", "soon")]))
                .is_err()
        );
        assert!(
            ClientConfig::from_lookup(lookup_from(&[("MORVO_REQUEST_TIMEOUT_SECS", "0")]))
                .is_err()
        );
        assert!(ClientConfig::from_lookup(lookup_from(&[("MORVO_CHECK_PROFILE", "maybe")])).is_err());
    }
}
