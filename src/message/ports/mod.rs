//! Port trait definitions for message delivery.
//!
//! Ports define the abstract interfaces the use case and client depend on.
//! Adapters implement these ports to connect them to HTTP or to in-memory
//! test doubles.

pub mod client;
pub mod send_message;
pub mod transport;

pub use client::{DeliveryResult, MessagingClient};
pub use send_message::SendMessagePort;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ResponseData, TransportResult,
};
