//! Mock HTTP transport for testing

use crate::errors::TransportError;
use crate::transport::{HttpBody, HttpRequest, HttpResponse, HttpTransport, StreamingResponse};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// A request as the transport saw it, with the body fully collected.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or(&b"null"[..])).unwrap()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

enum MockResponse {
    Response(HttpResponse),
    /// Streams `first` and then fails, for interrupted downloads.
    BrokenStream(StatusCode, Bytes),
    Error(TransportError),
}

/// Mock HTTP transport that records requests and replays queued responses
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

#[derive(Default)]
struct MockHttpTransportInner {
    responses: VecDeque<MockResponse>,
    requests: Vec<RecordedRequest>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response with the given status
    pub fn with_json_response(self, status: u16, body: impl ToString) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        self.push(MockResponse::Response(HttpResponse::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            Bytes::from(body.to_string()),
        )))
    }

    /// Queue a response with an arbitrary body
    pub fn with_response(self, status: StatusCode, body: impl Into<Bytes>) -> Self {
        self.push(MockResponse::Response(HttpResponse::new(status, HeaderMap::new(), body)))
    }

    /// Queue a response carrying specific headers
    pub fn with_full_response(self, response: HttpResponse) -> Self {
        self.push(MockResponse::Response(response))
    }

    /// Queue a failure where no response is obtained
    pub fn with_transport_error(self, error: TransportError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Queue a streaming response that breaks after its first chunk
    pub fn with_broken_stream(self, status: StatusCode, first: impl Into<Bytes>) -> Self {
        self.push(MockResponse::BrokenStream(status, first.into()))
    }

    fn push(self, response: MockResponse) -> Self {
        self.inner.lock().unwrap().responses.push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Verify that a request was made with the given method and URL path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.url.path() == path)
    }

    async fn record(&self, request: HttpRequest) -> Result<MockResponse, TransportError> {
        let body = match request.body {
            HttpBody::Empty => None,
            HttpBody::Bytes(bytes) => Some(bytes),
            HttpBody::Multipart(form) => Some(
                form.to_bytes()
                    .await
                    .map_err(|e| TransportError::Body(e.to_string()))?,
            ),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
            timeout: request.timeout,
        });

        inner
            .responses
            .pop_front()
            .ok_or_else(|| TransportError::RequestFailed("no mock response queued".to_string()))
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        match self.record(request).await? {
            MockResponse::Response(response) => Ok(response),
            MockResponse::BrokenStream(..) => {
                Err(TransportError::Body("connection reset".to_string()))
            }
            MockResponse::Error(error) => Err(error),
        }
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, TransportError> {
        match self.record(request).await? {
            MockResponse::Response(response) => Ok(StreamingResponse {
                status: response.status,
                headers: response.headers,
                body: Box::pin(stream::iter(vec![Ok(response.body)])),
            }),
            MockResponse::BrokenStream(status, first) => Ok(StreamingResponse {
                status,
                headers: HeaderMap::new(),
                body: Box::pin(stream::iter(vec![
                    Ok(first),
                    Err(TransportError::Body("connection reset".to_string())),
                ])),
            }),
            MockResponse::Error(error) => Err(error),
        }
    }
}
