//! Capability interfaces for the two notification channels. The engine never talks to a transport
//! directly; the hosting server supplies implementations of these traits, and tests substitute
//! fixed-outcome fakes.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MailTransportError {
    /// The relay could not be reached at all. This is the connectivity failure the workflow treats
    /// specially; anything the relay itself reports comes back as a status string instead.
    #[error("The mail relay is unreachable. {0}")]
    Unreachable(String),
}

#[derive(Debug, Clone, Error)]
pub enum OrderStreamError {
    #[error("The order stream rejected the message. {0}")]
    DispatchFailed(String),
}

/// The primary notification channel: synchronous, address-based delivery of the order details.
///
/// `send_message` returns the relay's status text. A non-success status is a *soft* failure; only
/// [`MailTransportError::Unreachable`] distinguishes a relay that could not be contacted.
pub trait MailTransport: Send + Sync {
    fn send_message(
        &self,
        recipient_name: &str,
        recipient_address: &str,
        include_details: bool,
        subject: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<String, MailTransportError>> + Send;
}

/// The secondary notification channel: fire-and-forget dispatch of a serialized order summary.
///
/// Implementations are only ever invoked from detached event-handler tasks, so a failing or slow
/// producer cannot delay a request or change its response.
pub trait OrderStreamProducer: Send + Sync {
    fn dispatch(&self, message: String) -> impl std::future::Future<Output = Result<(), OrderStreamError>> + Send;
}
