//! remote
//!
//! Client side of the device service: the JSON endpoints terminal actions
//! read from, plus the password gate endpoint.
//!
//! # Modules
//!
//! - `traits`: the [`DeviceApi`] trait and [`RemoteError`]
//! - `types`: records returned by the service
//! - [`http`]: reqwest implementation
//! - [`mock`]: in-memory implementation for tests

pub mod http;
pub mod mock;
mod traits;
mod types;

pub use http::HttpDeviceApi;
pub use traits::*;
pub use types::{from_epoch_millis, CallLog, Contact, GateReply, SmsMessage};
