//! In-memory implementation of the `HttpTransport` port.
//!
//! Records every request and answers with a scripted response, so the
//! client and use case can be exercised without a network. Also usable as
//! a dry-run transport.
//!
//! A poisoned request log is recovered rather than reported; every write
//! is a single push.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::message::ports::transport::{
    HttpRequest, HttpResponse, HttpTransport, ResponseData, TransportResult,
};

/// In-memory implementation of [`HttpTransport`].
///
/// Clones share the same request log.
///
/// # Example
///
/// ```
/// use metakit_whatsapp::message::adapters::memory::InMemoryTransport;
///
/// let transport = InMemoryTransport::ok();
/// assert!(transport.requests().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryTransport {
    response: HttpResponse,
    requests: Arc<RwLock<Vec<HttpRequest>>>,
}

impl InMemoryTransport {
    /// Creates a transport answering every request with `response`.
    #[must_use]
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            requests: Arc::default(),
        }
    }

    /// Creates a transport answering `200` with an empty JSON object.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(HttpResponse::new(200, ResponseData::Json(json!({}))))
    }

    /// Returns the requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::ok()
    }
}

#[async_trait]
impl HttpTransport for InMemoryTransport {
    async fn request(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        Ok(self.response.clone())
    }
}
