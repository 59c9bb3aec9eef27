//! Client credentials and endpoint configuration.
//!
//! A [`ClientConfig`] is immutable once built. It is usually loaded from the
//! environment with [`ClientConfig::from_env`], which accepts the same
//! variable names as the hosted service's dashboard exports.

use std::env;
use std::fmt;

use crate::util::{is_http_url, non_blank};
use crate::{Error, Result};

pub const ENV_CLOUD_NAME: &str = "CLOUD_NAME";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_API_SECRET: &str = "API_SECRET";
pub const ENV_API_BASE_URL: &str = "CLOUDPIC_API_BASE_URL";

/// Default API host for the `v1_1` upload API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";

/// Account credentials used to sign and address requests.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    account_name: String,
    access_key: String,
    access_secret: String,
    api_base_url: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClientConfig")
            .field("account_name", &self.account_name)
            .field("access_key", &self.access_key)
            .field("access_secret", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ClientConfig {
    /// Build a configuration against the default API host.
    ///
    /// Account name and key are trimmed. The secret is kept byte-for-byte
    /// since it is part of every signature. Blank values are rejected.
    pub fn new(
        account_name: impl Into<String>,
        access_key: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            account_name: required(account_name.into(), "account_name")?,
            access_key: required(access_key.into(), "access_key")?,
            access_secret: secret(access_secret.into())?,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (self-hosted gateway, test server).
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Result<Self> {
        self.api_base_url = normalize_base_url(&api_base_url.into())?;
        Ok(self)
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        parse_config(|key| env::var(key).ok())
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub(crate) fn access_secret(&self) -> &str {
        &self.access_secret
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
    let account_name = non_blank(lookup(ENV_CLOUD_NAME));
    let access_key = non_blank(lookup(ENV_API_KEY));
    let access_secret = lookup(ENV_API_SECRET).filter(|value| !value.trim().is_empty());
    let api_base_url = non_blank(lookup(ENV_API_BASE_URL));

    let mut missing = Vec::new();
    if account_name.is_none() {
        missing.push(ENV_CLOUD_NAME);
    }
    if access_key.is_none() {
        missing.push(ENV_API_KEY);
    }
    if access_secret.is_none() {
        missing.push(ENV_API_SECRET);
    }

    let (Some(account_name), Some(access_key), Some(access_secret)) =
        (account_name, access_key, access_secret)
    else {
        return Err(Error::Config(format!(
            "Media API credentials are incomplete. Missing: {}",
            missing.join(", ")
        )));
    };

    let config = ClientConfig::new(account_name, access_key, access_secret)?;
    match api_base_url {
        Some(url) => config.with_api_base_url(url),
        None => Ok(config),
    }
}

fn required(raw: String, field: &str) -> Result<String> {
    non_blank(Some(raw)).ok_or_else(|| Error::Config(format!("{field} must not be empty")))
}

fn secret(raw: String) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::Config("access_secret must not be empty".to_string()));
    }
    Ok(raw)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
