//! EmailJS REST client used by the server to deliver contact messages.
//!
//! The identifiers that address the relay (service, template and keys) come
//! from the environment and stay on the server.

use std::{
    env,
    sync::{Arc, LazyLock},
    time::Duration,
};

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use super::{ContactMessage, DispatchError, EmailDispatcher, TemplateParams};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "api/v1.0/email/send";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const REDACTED: &str = "[redacted]";

static DEFAULT_ENDPOINT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should parse"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("couldn't build http client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: Url,
    pub service_id: Secret<String>,
    pub template_id: Secret<String>,
    pub public_key: Secret<String>,
    /// Only needed when the relay account enforces private-key access.
    pub private_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn new(service_id: String, template_id: String, public_key: String) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT_URL.clone(),
            service_id: Secret::new(service_id),
            template_id: Secret::new(template_id),
            public_key: Secret::new(public_key),
            private_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let mut config = Self::new(
            required("EMAILJS_SERVICE_ID")?,
            required("EMAILJS_TEMPLATE_ID")?,
            required("EMAILJS_PUBLIC_KEY")?,
        );
        config.private_key = var("EMAILJS_PRIVATE_KEY").map(Secret::new);
        if let Some(endpoint) = var("EMAILJS_ENDPOINT") {
            config.endpoint = Url::parse(endpoint.trim()).map_err(|err| ConfigError::Invalid {
                var: "EMAILJS_ENDPOINT",
                reason: err.to_string(),
            })?;
        }
        if let Some(secs) = var("EMAILJS_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|err| ConfigError::Invalid {
                var: "EMAILJS_TIMEOUT_SECS",
                reason: err.to_string(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    fn send_url(&self) -> Result<Url, DispatchError> {
        let mut base = self.endpoint.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(SEND_PATH)
            .map_err(|err| DispatchError::Network(err.to_string()))
    }

    /// Replaces every configured identifier found in `text`.
    fn scrub(&self, text: &str) -> String {
        let mut secrets = vec![
            self.service_id.expose_secret().as_str(),
            self.template_id.expose_secret().as_str(),
            self.public_key.expose_secret().as_str(),
        ];
        if let Some(key) = &self.private_key {
            secrets.push(key.expose_secret().as_str());
        }
        secrets
            .into_iter()
            .filter(|s| !s.is_empty())
            .fold(text.to_string(), |acc, s| acc.replace(s, REDACTED))
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams,
}

#[derive(Debug, Clone)]
pub struct EmailJsDispatcher {
    config: Arc<RelayConfig>,
    client: Client,
}

impl EmailJsDispatcher {
    pub fn new(config: RelayConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Makes exactly one request to the relay.
    #[instrument(skip_all)]
    pub async fn deliver(&self, message: ContactMessage) -> Result<(), DispatchError> {
        let config = &*self.config;
        let body = SendRequest {
            service_id: config.service_id.expose_secret(),
            template_id: config.template_id.expose_secret(),
            user_id: config.public_key.expose_secret(),
            access_token: config.private_key.as_ref().map(|k| k.expose_secret().as_str()),
            template_params: message.into(),
        };

        let response = self
            .client
            .post(config.send_url()?)
            .json(&body)
            .send()
            .await
            .map_err(|err| DispatchError::Network(config.scrub(&err.without_url().to_string())))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "email relay accepted message");
            return Ok(());
        }

        let reason = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());
        let reason = config.scrub(reason.trim());
        tracing::warn!(%status, %reason, "email relay rejected message");
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}

impl EmailDispatcher for EmailJsDispatcher {
    async fn send(&self, message: ContactMessage) -> Result<(), DispatchError> {
        self.deliver(message).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("EMAILJS_SERVICE_ID", "service_abc123"),
        ("EMAILJS_TEMPLATE_ID", "template_def456"),
        ("EMAILJS_PUBLIC_KEY", "pubKey789"),
    ];

    #[test]
    fn test_config_defaults() {
        let config = RelayConfig::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.endpoint.as_str(), "https://api.emailjs.com/");
        assert_eq!(config.service_id.expose_secret(), "service_abc123");
        assert_eq!(config.template_id.expose_secret(), "template_def456");
        assert_eq!(config.public_key.expose_secret(), "pubKey789");
        assert!(config.private_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(
            config.send_url().unwrap().as_str(),
            "https://api.emailjs.com/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = RelayConfig::new("s".to_string(), "t".to_string(), "p".to_string());
        assert_eq!(config.endpoint.as_str(), "https://api.emailjs.com/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("EMAILJS_PRIVATE_KEY", "priv"),
            ("EMAILJS_ENDPOINT", "http://127.0.0.1:9999/relay"),
            ("EMAILJS_TIMEOUT_SECS", " 3 "),
        ]);
        let config = RelayConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(
            config.private_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("priv")
        );
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.send_url().unwrap().as_str(),
            "http://127.0.0.1:9999/relay/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_config_missing_and_blank() {
        let err = RelayConfig::from_lookup(lookup(&REQUIRED[..2])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EMAILJS_PUBLIC_KEY")));

        let mut vars = REQUIRED.to_vec();
        vars[0].1 = "  ";
        let err = RelayConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EMAILJS_SERVICE_ID")));
    }

    #[test]
    fn test_config_invalid_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("EMAILJS_TIMEOUT_SECS", "soon"));
        let err = RelayConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "EMAILJS_TIMEOUT_SECS",
                ..
            }
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("EMAILJS_ENDPOINT", "not a url"));
        let err = RelayConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "EMAILJS_ENDPOINT",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_redacts_identifiers() {
        let config = RelayConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        let debug = format!("{config:?}");
        for (_, value) in REQUIRED {
            assert!(!debug.contains(value), "{value} leaked in {debug}");
        }
    }

    #[test]
    fn test_scrub() {
        let mut config = RelayConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        config.private_key = Some(Secret::new("priv_key".to_string()));

        assert_eq!(
            config.scrub("The service ID service_abc123 is invalid for pubKey789 / priv_key"),
            "The service ID [redacted] is invalid for [redacted] / [redacted]"
        );
        assert_eq!(config.scrub("Bad request"), "Bad request");
    }
}
