// Process configuration read at startup.
//
// Responsibilities
// - Read the bind address, app id, store credentials and optional auth token.
// - Decide whether the remote store is configured. Missing or unreadable credentials are not
//   fatal; the service then runs with an unconfigured store.

use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::in_memory::InMemoryRemoteStore;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_APP_ID: &str = "default-app-id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR {0:?} is not a socket address")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl StoreConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub app_id: String,
    pub store: Option<StoreConfig>,
    pub initial_auth_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_bind_addr.clone()))?;

        let store = non_empty("STORE_CONFIG").and_then(|raw| {
            match serde_json::from_str::<StoreConfig>(&raw) {
                Ok(store) => Some(store),
                Err(e) => {
                    tracing::warn!(error = %e, "STORE_CONFIG is not valid JSON, ignoring it");
                    None
                }
            }
        });

        Ok(Self {
            bind_addr,
            app_id: non_empty("APP_ID").unwrap_or_else(|| DEFAULT_APP_ID.into()),
            store,
            initial_auth_token: non_empty("INITIAL_AUTH_TOKEN"),
        })
    }

    pub fn is_store_configured(&self) -> bool {
        self.store.as_ref().is_some_and(StoreConfig::has_api_key)
    }

    /// The backend handle every component shares. Only the in-memory store ships with the service.
    pub fn store_client(&self) -> StoreClient {
        if self.is_store_configured() {
            StoreClient::ready(Arc::new(InMemoryRemoteStore::new()))
        } else {
            StoreClient::Unconfigured
        }
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert_eq!(config.initial_auth_token, None);
        assert!(!config.is_store_configured());
        assert!(!config.store_client().is_configured());
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("APP_ID", "kpi-app"),
            ("STORE_CONFIG", r#"{"apiKey":"k-1","projectId":"p-1"}"#),
            ("INITIAL_AUTH_TOKEN", "user-7"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.app_id, "kpi-app");
        assert_eq!(
            config.store.as_ref().and_then(|s| s.project_id.as_deref()),
            Some("p-1")
        );
        assert_eq!(config.initial_auth_token.as_deref(), Some("user-7"));
        assert!(config.store_client().is_configured());
    }

    #[rstest]
    #[case::no_api_key(r#"{"projectId":"p-1"}"#)]
    #[case::blank_api_key(r#"{"apiKey":" "}"#)]
    #[case::not_json("apiKey=k-1")]
    fn it_should_stay_unconfigured_without_usable_credentials(#[case] raw: &str) {
        let config = AppConfig::from_lookup(lookup(&[("STORE_CONFIG", raw)])).unwrap();
        assert!(!config.is_store_configured());
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[("APP_ID", ""), ("INITIAL_AUTH_TOKEN", "  ")]))
                .unwrap();
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert_eq!(config.initial_auth_token, None);
    }

    #[rstest]
    fn it_should_reject_an_invalid_bind_address() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr("localhost".into()))
        );
    }
}
