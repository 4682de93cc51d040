//! Outbound push messaging.
//!
//! Provides a [`PushSender`] trait and the Firebase Cloud Messaging
//! implementation [`FcmSender`].

mod fcm;
mod service;
mod service_account;

pub use fcm::FcmSender;
pub use service::{PushError, PushResult, PushSender};
pub use service_account::ServiceAccount;

#[cfg(test)]
pub use service::MockPushSender;
