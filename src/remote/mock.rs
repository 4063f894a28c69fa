//! remote::mock
//!
//! In-memory [`DeviceApi`] for deterministic testing.
//!
//! # Example
//!
//! ```
//! use phonedeck::remote::mock::{MockDeviceApi, MockOperation};
//! use phonedeck::remote::{Contact, DeviceApi};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let api = MockDeviceApi::new().with_contacts(vec![Contact {
//!     name: "Alice".to_string(),
//!     number: "555-0100".to_string(),
//! }]);
//!
//! let contacts = api.contacts().await.unwrap();
//! assert_eq!(contacts[0].name, "Alice");
//! assert_eq!(api.operations(), vec![MockOperation::Contacts]);
//! # });
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::{DeviceApi, RemoteError};
use super::types::{CallLog, Contact, GateReply, SmsMessage};

/// Mock device service.
///
/// Clones share state, so a test can keep a handle after giving one away.
#[derive(Debug, Clone, Default)]
pub struct MockDeviceApi {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Debug, Default)]
struct MockInner {
    contacts: Vec<Contact>,
    sms: Vec<SmsMessage>,
    call_logs: Vec<CallLog>,
    image_reply: serde_json::Value,
    gate_status: Option<u16>,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Which operation should fail, and how.
#[derive(Debug, Clone)]
pub enum FailOn {
    Contacts(RemoteError),
    Sms(RemoteError),
    CallLogs(RemoteError),
    MakeImage(RemoteError),
    SubmitPassword(RemoteError),
}

/// Recorded call for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Contacts,
    Sms,
    CallLogs,
    MakeImage,
    SubmitPassword { password: String },
}

impl MockDeviceApi {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(self, contacts: Vec<Contact>) -> Self {
        self.lock().contacts = contacts;
        self
    }

    pub fn with_sms(self, sms: Vec<SmsMessage>) -> Self {
        self.lock().sms = sms;
        self
    }

    pub fn with_call_logs(self, call_logs: Vec<CallLog>) -> Self {
        self.lock().call_logs = call_logs;
        self
    }

    pub fn with_image_reply(self, reply: serde_json::Value) -> Self {
        self.lock().image_reply = reply;
        self
    }

    /// Status returned by the password gate (default 200).
    pub fn with_gate_status(self, status: u16) -> Self {
        self.lock().gate_status = Some(status);
        self
    }

    /// Make one operation fail until cleared.
    pub fn fail_on(&self, fail: FailOn) {
        self.lock().fail_on = Some(fail);
    }

    pub fn clear_failure(&self) {
        self.lock().fail_on = None;
    }

    /// Calls made so far, in order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, op: MockOperation) {
        self.lock().operations.push(op);
    }
}

#[async_trait]
impl DeviceApi for MockDeviceApi {
    async fn contacts(&self) -> Result<Vec<Contact>, RemoteError> {
        self.record(MockOperation::Contacts);
        let inner = self.lock();
        if let Some(FailOn::Contacts(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.contacts.clone())
    }

    async fn sms(&self) -> Result<Vec<SmsMessage>, RemoteError> {
        self.record(MockOperation::Sms);
        let inner = self.lock();
        if let Some(FailOn::Sms(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.sms.clone())
    }

    async fn call_logs(&self) -> Result<Vec<CallLog>, RemoteError> {
        self.record(MockOperation::CallLogs);
        let inner = self.lock();
        if let Some(FailOn::CallLogs(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.call_logs.clone())
    }

    async fn make_image(&self) -> Result<serde_json::Value, RemoteError> {
        self.record(MockOperation::MakeImage);
        let inner = self.lock();
        if let Some(FailOn::MakeImage(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.image_reply.clone())
    }

    async fn submit_password(&self, password: &str) -> Result<GateReply, RemoteError> {
        self.record(MockOperation::SubmitPassword {
            password: password.to_string(),
        });
        let inner = self.lock();
        if let Some(FailOn::SubmitPassword(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        let status = inner.gate_status.unwrap_or(200);
        Ok(GateReply {
            status,
            reason: if status == 200 { "OK" } else { "" }.to_string(),
        })
    }
}
