//! remote::traits
//!
//! The `DeviceApi` trait and its error type.
//!
//! # Design
//!
//! The trait is async because every call is network I/O. Actions depend on
//! the trait rather than the HTTP implementation so they can be exercised
//! against [`MockDeviceApi`](super::mock::MockDeviceApi).

use async_trait::async_trait;
use thiserror::Error;

use super::types::{CallLog, Contact, GateReply, SmsMessage};

/// Errors from device service calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Connection, DNS, timeout, or other transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service error on '{endpoint}': {status} - {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("malformed response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },

    /// The configured base URL is unusable.
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
}

/// Endpoint paths, relative to the service base URL.
pub mod endpoints {
    pub const CONTACTS: &str = "getContacts";
    pub const SMS: &str = "getSMS";
    pub const CALL_LOGS: &str = "getLogs";
    pub const MAKE_IMAGE: &str = "makeImage";
    pub const PASSWORD: &str = "getPassword";
}

/// Operations offered by the device service.
#[async_trait]
pub trait DeviceApi: Send + Sync {
    /// All contact entries, flattened, in response order (duplicates kept).
    async fn contacts(&self) -> Result<Vec<Contact>, RemoteError>;

    /// All text messages.
    async fn sms(&self) -> Result<Vec<SmsMessage>, RemoteError>;

    /// All call log entries.
    async fn call_logs(&self) -> Result<Vec<CallLog>, RemoteError>;

    /// Ask the device to build an image; returns the service's JSON reply.
    async fn make_image(&self) -> Result<serde_json::Value, RemoteError>;

    /// Post the device password. Any HTTP status is a reply, not an error.
    async fn submit_password(&self, password: &str) -> Result<GateReply, RemoteError>;
}
