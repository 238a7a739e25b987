//! Outbound messages for the WhatsApp Cloud API.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure wire types ([`domain::Message`], [`domain::MessagePayload`], etc.)
//! - **Builders**: Validating accumulators producing messages ([`builders::TextMessageBuilder`], ...)
//! - **Ports**: Abstract trait interfaces ([`ports::HttpTransport`], [`ports::MessagingClient`], [`ports::SendMessagePort`])
//! - **Adapters**: Concrete implementations ([`adapters::http::ReqwestTransport`], [`adapters::cloud_api::CloudApiClient`], [`adapters::memory::InMemoryTransport`])
//! - **Services**: The send-message use case ([`services::SendMessageService`])
//!
//! Builders perform no I/O. Only the client and the use case reach the
//! network, through the transport port.

pub mod adapters;
pub mod builders;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
