//! Inbound port for the send-message use case.

use super::client::DeliveryResult;
use crate::message::domain::Message;
use async_trait::async_trait;

/// The capability to send a message, independent of the client in use.
#[async_trait]
pub trait SendMessagePort: Send + Sync {
    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns the delivery error of the underlying client unchanged.
    async fn execute(&self, message: &Message) -> DeliveryResult<()>;
}
