//! Cloud API implementation of the `MessagingClient` port.

use crate::{
    config::ClientConfig,
    message::{
        domain::Message,
        error::DeliveryError,
        ports::{
            client::{DeliveryResult, MessagingClient},
            transport::{HttpMethod, HttpRequest, HttpTransport},
        },
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends messages to `{base_url}/messages` with bearer authentication.
///
/// One call, one request: failures are reported immediately and never
/// retried.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use metakit_whatsapp::config::ClientConfig;
/// use metakit_whatsapp::message::adapters::{cloud_api::CloudApiClient, http::ReqwestTransport};
///
/// let config = ClientConfig::new("token", "https://graph.facebook.com/v18.0/123456")
///     .expect("valid config");
/// let client = CloudApiClient::new(config, Arc::new(ReqwestTransport::new()));
/// assert_eq!(client.config().base_url(), "https://graph.facebook.com/v18.0/123456");
/// ```
#[derive(Debug, Clone)]
pub struct CloudApiClient<T>
where
    T: HttpTransport,
{
    config: ClientConfig,
    transport: Arc<T>,
}

impl<T> CloudApiClient<T>
where
    T: HttpTransport,
{
    /// Creates a client bound to `config` and `transport`.
    pub const fn new(config: ClientConfig, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl<T> MessagingClient for CloudApiClient<T>
where
    T: HttpTransport,
{
    async fn send_message(&self, message: &Message) -> DeliveryResult<()> {
        let request = HttpRequest::new(HttpMethod::Post, self.config.messages_url())
            .with_header("Authorization", self.config.authorization())
            .with_body(serde_json::to_value(message)?);

        debug!(kind = %message.kind(), to = message.recipient(), "sending message");
        let response = self.transport.request(request).await?;

        if response.is_failure() {
            warn!(
                status = response.status,
                body = %response.data.to_json_string(),
                "provider rejected message"
            );
            return Err(DeliveryError::Rejected {
                status: response.status,
                body: response.data,
            });
        }

        debug!(status = response.status, "message accepted");
        Ok(())
    }
}
