use dioxus::prelude::*;
use serde::Deserialize;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("form access key is not configured")]
    MissingAccessKey,
    #[error("form endpoint is empty")]
    MissingEndpoint,
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("config decode failed: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_form_endpoint")]
    pub form_endpoint: String,
    #[serde(default)]
    pub form_access_key: String,
}

fn default_form_endpoint() -> String {
    DEFAULT_FORM_ENDPOINT.to_string()
}

impl RuntimeConfig {
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.form_access_key.trim().is_empty() {
            return Err(ConfigError::MissingAccessKey);
        }
        if self.form_endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(raw)
            .map_err(|err| ConfigError::Decode(err.to_string()))?
            .validated()
    }

    /// Builds the config from an env-style lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            form_endpoint: lookup("CONTACT_FORM_ENDPOINT").unwrap_or_else(default_form_endpoint),
            form_access_key: lookup("WEB3FORMS_ACCESS_KEY").unwrap_or_default(),
        }
        .validated()
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move {
        fetch_runtime_config().await.map_err(|err| {
            tracing::warn!(error = %err, "runtime config unavailable");
            err.to_string()
        })
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::debug!(error = %err, "falling back to bundled config");
            fetch_config_from("/assets/config.json").await
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, ConfigError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Fetch(format!("status {}", response.status())));
    }
    let raw = response
        .text()
        .await
        .map_err(|err| ConfigError::Decode(err.to_string()))?;
    RuntimeConfig::from_json(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    RuntimeConfig::from_lookup(|name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_defaults_when_absent() {
        let config = RuntimeConfig::from_json(r#"{"form_access_key":"abc"}"#).unwrap();
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.form_access_key, "abc");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(
            RuntimeConfig::from_json(r#"{"form_access_key":"  "}"#),
            Err(ConfigError::MissingAccessKey)
        );
        assert_eq!(
            RuntimeConfig::from_lookup(|_| None),
            Err(ConfigError::MissingAccessKey)
        );
    }

    #[test]
    fn lookup_overrides_endpoint() {
        let config = RuntimeConfig::from_lookup(|name| match name {
            "WEB3FORMS_ACCESS_KEY" => Some("key".to_string()),
            "CONTACT_FORM_ENDPOINT" => Some("http://localhost:9000/submit".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.form_endpoint, "http://localhost:9000/submit");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            RuntimeConfig::from_json("not json"),
            Err(ConfigError::Decode(_))
        ));
    }
}
