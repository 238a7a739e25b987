//! Send-message use case.
//!
//! `SendMessageService` decouples callers from the concrete client: it
//! accepts a built message and hands it to whichever [`MessagingClient`]
//! it was constructed with.

use std::sync::Arc;

use async_trait::async_trait;

use crate::message::{
    domain::Message,
    ports::{
        client::{DeliveryResult, MessagingClient},
        send_message::SendMessagePort,
    },
};

/// Use case delivering one message through a bound client.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use metakit_whatsapp::config::ClientConfig;
/// use metakit_whatsapp::message::adapters::{cloud_api::CloudApiClient, memory::InMemoryTransport};
/// use metakit_whatsapp::message::builders::{MessageBuilder, TextMessageBuilder};
/// use metakit_whatsapp::message::ports::SendMessagePort;
/// use metakit_whatsapp::message::services::SendMessageService;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let transport = Arc::new(InMemoryTransport::ok());
/// let config = ClientConfig::new("token", "https://example.com/v18.0/123").expect("config");
/// let service = SendMessageService::new(Arc::new(CloudApiClient::new(config, transport.clone())));
///
/// let message = TextMessageBuilder::new()
///     .set_recipient("5511999999999")
///     .set_text("Olá mundo!")
///     .build()
///     .expect("valid message");
/// service.execute(&message).await.expect("delivery should succeed");
/// assert_eq!(transport.request_count(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct SendMessageService<C>
where
    C: MessagingClient,
{
    client: Arc<C>,
}

impl<C> Clone for SendMessageService<C>
where
    C: MessagingClient,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> SendMessageService<C>
where
    C: MessagingClient,
{
    /// Creates the use case around `client`.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C> SendMessagePort for SendMessageService<C>
where
    C: MessagingClient,
{
    async fn execute(&self, message: &Message) -> DeliveryResult<()> {
        self.client.send_message(message).await
    }
}
