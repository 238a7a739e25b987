//! Port for delivering messages to the provider.

use crate::message::{domain::Message, error::DeliveryError};
use async_trait::async_trait;

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Port for sending a built message.
///
/// Each call performs exactly one delivery attempt; implementations do not
/// retry.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Rejected`] when the provider answers with a
    /// failure status, or passes transport errors through unchanged.
    async fn send_message(&self, message: &Message) -> DeliveryResult<()>;
}
