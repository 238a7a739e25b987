//! `reqwest`-backed implementation of the transport port.

use crate::message::{
    error::TransportError,
    ports::transport::{
        HttpMethod, HttpRequest, HttpResponse, HttpTransport, ResponseData, TransportResult,
    },
};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP transport using a shared `reqwest` client.
///
/// Sends JSON bodies with `Content-Type: application/json` and decodes the
/// response as JSON only when its content type says so.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with default client settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the client cannot be built.
    pub fn with_timeout(timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::network)?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .headers(build_headers(&request)?);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(TransportError::network)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await.map_err(TransportError::network)?;
        debug!(status, "received response");

        Ok(HttpResponse::new(
            status,
            decode_body(content_type.as_deref(), text)?,
        ))
    }
}

fn build_headers(request: &HttpRequest) -> TransportResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    for (name, value) in &request.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

/// Decodes a response body according to its `Content-Type`.
///
/// A missing content type is treated as text.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] if the content type declares JSON and
/// the body does not parse.
pub fn decode_body(content_type: Option<&str>, text: String) -> TransportResult<ResponseData> {
    if content_type.is_some_and(|value| value.contains(JSON_CONTENT_TYPE)) {
        return Ok(ResponseData::Json(serde_json::from_str(&text)?));
    }
    Ok(ResponseData::Text(text))
}

#[cfg(test)]
mod tests {
    use super::{ReqwestTransport, build_headers, decode_body};
    use crate::message::{
        error::TransportError,
        ports::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ResponseData},
    };
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use rstest::rstest;
    use serde_json::json;
    use std::time::Duration;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    const FORBIDDEN_JSON: &str = "HTTP/1.1 403 Forbidden\r\n\
        Content-Type: application/json\r\n\
        Content-Length: 21\r\n\
        Connection: close\r\n\r\n\
        {\"error\":\"Forbidden\"}";

    const OK_UNTYPED: &str = "HTTP/1.1 200 OK\r\n\
        Content-Length: 2\r\n\
        Connection: close\r\n\r\n\
        OK";

    /// Serves `response` to a single connection and yields the raw request.
    async fn serve_once(response: &'static str) -> eyre::Result<(String, JoinHandle<String>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/messages", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let mut received = Vec::new();
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut chunk = [0_u8; 1024];
                while !request_complete(&received) {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(read) => {
                            received.extend_from_slice(chunk.get(..read).unwrap_or_default());
                        }
                    }
                }
                stream.write_all(response.as_bytes()).await.ok();
                stream.shutdown().await.ok();
            }
            String::from_utf8_lossy(&received).into_owned()
        });
        Ok((url, handle))
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    #[tokio::test(flavor = "multi_thread")]
    #[expect(
        clippy::panic_in_result_fn,
        reason = "Test uses assertions for verification while returning Result for error propagation"
    )]
    async fn failure_status_is_returned_as_response_with_json_body() -> eyre::Result<()> {
        let (url, server) = serve_once(FORBIDDEN_JSON).await?;
        let request = HttpRequest::new(HttpMethod::Post, url)
            .with_header("Authorization", "Bearer token")
            .with_body(json!({ "to": "5511999999999" }));

        let response = ReqwestTransport::new().request(request).await?;
        let received = server.await?.to_ascii_lowercase();

        assert_eq!(
            response,
            HttpResponse::new(403, ResponseData::Json(json!({ "error": "Forbidden" })))
        );
        assert!(received.starts_with("post /messages"));
        assert!(received.contains("authorization: bearer token"));
        assert!(received.contains("content-type: application/json"));
        assert!(received.contains(r#"{"to":"5511999999999"}"#));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    #[expect(
        clippy::panic_in_result_fn,
        reason = "Test uses assertions for verification while returning Result for error propagation"
    )]
    async fn missing_content_type_yields_text_body() -> eyre::Result<()> {
        let (url, server) = serve_once(OK_UNTYPED).await?;

        let response = ReqwestTransport::new()
            .request(HttpRequest::new(HttpMethod::Get, url))
            .await?;
        server.await?;

        assert_eq!(
            response,
            HttpResponse::new(200, ResponseData::Text("OK".to_owned()))
        );
        Ok(())
    }

    #[rstest]
    #[case(Some("application/json"))]
    #[case(Some("application/json; charset=utf-8"))]
    fn json_content_type_parses_body(#[case] content_type: Option<&str>) {
        let data = decode_body(content_type, r#"{"success":true}"#.to_owned())
            .expect("body should decode");
        assert_eq!(data, ResponseData::Json(json!({"success": true})));
    }

    #[rstest]
    #[case(Some("text/plain"), "OK")]
    #[case(None, "no content-type")]
    fn other_content_types_keep_raw_text(
        #[case] content_type: Option<&str>,
        #[case] body: &str,
    ) {
        let data = decode_body(content_type, body.to_owned()).expect("body should decode");
        assert_eq!(data, ResponseData::Text(body.to_owned()));
    }

    #[rstest]
    fn malformed_json_is_a_decode_error() {
        let result = decode_body(Some("application/json"), "not json".to_owned());
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[rstest]
    fn headers_include_json_content_type_and_caller_headers() {
        let request = HttpRequest::new(HttpMethod::Post, "https://example.com")
            .with_header("Authorization", "Bearer token");
        let headers = build_headers(&request).expect("headers should encode");

        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer token")
        );
    }

    #[rstest]
    fn invalid_header_value_is_rejected() {
        let request = HttpRequest::new(HttpMethod::Get, "https://example.com")
            .with_header("X-Trace", "line\nbreak");
        let result = build_headers(&request);
        assert!(matches!(result, Err(TransportError::InvalidHeader(name)) if name == "X-Trace"));
    }

    #[rstest]
    fn methods_map_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }

    #[rstest]
    fn timeout_transport_builds() {
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
