//! remote::types
//!
//! Records returned by the device service.
//!
//! Only the fields the console renders are modeled. Timestamps arrive as
//! epoch milliseconds; phone numbers may arrive as strings or numbers.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Deserializer};

/// One (name, number) pair from the contacts list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

/// A text message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SmsMessage {
    #[serde(rename = "Address", deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(rename = "Content", default)]
    pub content: String,
    /// Received time, epoch milliseconds.
    #[serde(rename = "Date")]
    pub date: f64,
    /// Sent time, epoch milliseconds.
    #[serde(rename = "Sent")]
    pub sent: f64,
}

/// A call log entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallLog {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Number", deserialize_with = "lenient_string")]
    pub number: String,
    /// Call time, epoch milliseconds.
    #[serde(rename = "Date")]
    pub date: f64,
    /// Duration in seconds, as sent by the device.
    #[serde(rename = "Duration", deserialize_with = "lenient_string")]
    pub duration: String,
}

/// Reply to the password gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReply {
    pub status: u16,
    pub reason: String,
}

/// `{"contacts": [{"<name>": "<number>", ...}, ...]}`
///
/// Entries keep the device's key order (serde_json `preserve_order`).
#[derive(Debug, Deserialize)]
pub(crate) struct ContactsEnvelope {
    pub contacts: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl ContactsEnvelope {
    /// Flatten the per-entry maps into pairs, in response order.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
            .into_iter()
            .flat_map(|entry| entry.into_iter())
            .map(|(name, number)| Contact {
                name,
                number: value_to_string(number),
            })
            .collect()
    }
}

/// `{"sms": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct SmsEnvelope {
    pub sms: Vec<SmsMessage>,
}

/// `{"calllogs": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct CallLogEnvelope {
    pub calllogs: Vec<CallLog>,
}

/// Convert epoch milliseconds to local time.
///
/// Returns `None` for values outside chrono's representable range.
pub fn from_epoch_millis(millis: f64) -> Option<DateTime<Local>> {
    if !millis.is_finite() {
        return None;
    }
    let whole = millis.trunc() as i64;
    Local.timestamp_millis_opt(whole).single()
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_string(value))
}
