//! remote::http
//!
//! HTTP implementation of [`DeviceApi`] using reqwest.
//!
//! Every endpoint is `<base_url><endpoint>`: GET for reads, POST with a
//! JSON body for the password gate.
//!
//! # Example
//!
//! ```no_run
//! use phonedeck::remote::{DeviceApi, HttpDeviceApi};
//! use std::time::Duration;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let api = HttpDeviceApi::new("http://127.0.0.1:5000/", Duration::from_secs(30)).unwrap();
//! let contacts = api.contacts().await.unwrap();
//! println!("{} contacts", contacts.len());
//! # });
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::traits::{endpoints, DeviceApi, RemoteError};
use super::types::{
    CallLog, CallLogEnvelope, Contact, ContactsEnvelope, GateReply, SmsEnvelope, SmsMessage,
};

/// User-Agent header value for service requests.
const USER_AGENT_VALUE: &str = concat!("phonedeck/", env!("CARGO_PKG_VERSION"));

/// Longest error body echoed back to the operator.
const MAX_ERROR_BODY: usize = 200;

/// Device service client.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    client: Client,
    base_url: String,
}

impl HttpDeviceApi {
    /// Create a client for the service at `base_url`.
    ///
    /// A trailing `/` is added to `base_url` when missing.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidUrl` if `base_url` is not http(s), or
    /// `RemoteError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let mut base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::InvalidUrl(base_url));
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The base URL, with trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RemoteError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        self.handle_response(endpoint, response).await
    }

    /// Map status and body to a decoded value or a `RemoteError`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: Response,
    ) -> Result<T, RemoteError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                truncate(body.trim(), MAX_ERROR_BODY)
            };
            return Err(RemoteError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DeviceApi for HttpDeviceApi {
    async fn contacts(&self) -> Result<Vec<Contact>, RemoteError> {
        let envelope: ContactsEnvelope = self.get_json(endpoints::CONTACTS).await?;
        Ok(envelope.into_contacts())
    }

    async fn sms(&self) -> Result<Vec<SmsMessage>, RemoteError> {
        let envelope: SmsEnvelope = self.get_json(endpoints::SMS).await?;
        Ok(envelope.sms)
    }

    async fn call_logs(&self) -> Result<Vec<CallLog>, RemoteError> {
        let envelope: CallLogEnvelope = self.get_json(endpoints::CALL_LOGS).await?;
        Ok(envelope.calllogs)
    }

    async fn make_image(&self) -> Result<serde_json::Value, RemoteError> {
        self.get_json(endpoints::MAKE_IMAGE).await
    }

    async fn submit_password(&self, password: &str) -> Result<GateReply, RemoteError> {
        let body = serde_json::json!({ "password": password });

        let response = self
            .client
            .post(self.url(endpoints::PASSWORD))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        Ok(GateReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        })
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
