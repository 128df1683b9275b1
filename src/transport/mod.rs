mod endpoint;
mod http_transport;
mod multipart;
mod request_builder;
mod response_parser;

pub use endpoint::{ArrayFormat, Endpoint, EndpointBody, QueryValue, ServiceInfo};
pub use http_transport::{HttpTransport, ReqwestTransport};
pub use multipart::{BodyStream, MultipartForm};
pub use request_builder::RequestBuilder;
pub use response_parser::ResponseParser;

pub(crate) use endpoint::EndpointParts;

use crate::errors::TransportError;
use bytes::Bytes;
use futures::Stream;
use http::{HeaderMap, Method, StatusCode};
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// A fully resolved request, ready for the authenticator and the transport.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: HttpBody,
    /// Passed through to the transport; the core applies no timeout itself.
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub enum HttpBody {
    Empty,
    Bytes(Bytes),
    Multipart(MultipartForm),
}

impl HttpBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, HttpBody::Empty)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

pub type ResponseStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// Response whose body is consumed incrementally, used for downloads.
pub struct StreamingResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseStream,
}

impl std::fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
