//! Metakit WhatsApp: typed messages for the WhatsApp Cloud API.
//!
//! This crate builds validated text, image, audio, template and
//! interactive messages and sends them to the provider's `/messages`
//! endpoint.
//!
//! # Architecture
//!
//! Metakit follows hexagonal architecture principles:
//!
//! - **Domain**: Pure wire types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the transport and client
//! - **Adapters**: Concrete implementations of ports (`reqwest`, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Provider credentials and endpoint
//! - [`message`]: Message model, builders and delivery

pub mod config;
pub mod message;
