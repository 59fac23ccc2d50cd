//! Runtime settings: `.env` loading and flag/environment resolution.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use gbsearch_api::{Client, HttpTransport};

pub const API_KEY_VAR: &str = "GBSEARCH_API_KEY";
pub const BASE_URL_VAR: &str = "GBSEARCH_BASE_URL";
pub const TIMEOUT_VAR: &str = "GBSEARCH_TIMEOUT_SECS";

/// Loads `.env`, or `.env.<GBSEARCH_ENV>` when that variable is set.
pub fn load_dotenv() {
    let env_filename = env::var("GBSEARCH_ENV")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

#[derive(Debug, Default, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Flags win over environment variables; `lookup` reads the environment.
    pub fn resolve(
        api_key: Option<&str>,
        base_url: Option<&str>,
        timeout_secs: Option<u64>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .map(|s| s.to_string())
            .or_else(|| lookup(API_KEY_VAR))
            .filter(|s| !s.is_empty());
        let base_url = base_url
            .map(|s| s.to_string())
            .or_else(|| lookup(BASE_URL_VAR))
            .filter(|s| !s.is_empty());
        let timeout_secs = match timeout_secs {
            Some(secs) => Some(secs),
            None => lookup(TIMEOUT_VAR)
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))
                })
                .transpose()?,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn client(&self) -> Client {
        let mut transport = HttpTransport::new();
        if let Some(timeout) = self.timeout {
            transport = transport.with_timeout(timeout);
        }
        let mut client = Client::with_transport(transport);
        if let Some(base_url) = &self.base_url {
            tracing::debug!("Using base URL {}", base_url);
            client = client.base_url(base_url);
        }
        if let Some(api_key) = &self.api_key {
            client = client.with_api_key(api_key);
        }
        client
    }
}
