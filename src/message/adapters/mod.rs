//! Adapter implementations for the delivery ports.
//!
//! - [`cloud_api`]: the messaging client speaking to the Cloud API
//! - [`http`]: `reqwest`-backed transport
//! - [`memory`]: recording transport for tests and dry runs

pub mod cloud_api;
pub mod http;
pub mod memory;
