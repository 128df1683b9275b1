use crate::client::ServiceConfig;
use crate::errors::{ConfigurationError, TransportError, WatsonResult};
use crate::transport::{HttpBody, HttpRequest, HttpResponse, StreamingResponse};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

/// The network collaborator. Implementations send exactly what they are
/// given and report failures where no response was obtained.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and buffers the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Sends a request and hands back the body as a stream.
    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, TransportError>;
}

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a client tuned from configuration.
    pub fn new(config: &ServiceConfig) -> WatsonResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one with custom TLS or proxy settings.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn prepare(&self, request: HttpRequest) -> Result<reqwest::RequestBuilder, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match request.body {
            HttpBody::Empty => builder,
            HttpBody::Bytes(bytes) => builder.body(bytes),
            HttpBody::Multipart(form) => {
                let stream = form
                    .into_stream()
                    .await
                    .map_err(|e| TransportError::Body(format!("multipart part unreadable: {}", e)))?;
                builder.body(reqwest::Body::wrap_stream(stream))
            }
        };

        Ok(builder)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.prepare(request).await?.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, TransportError> {
        let response = self.prepare(request).await?.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from));

        Ok(StreamingResponse {
            status,
            headers,
            body: Box::pin(body),
        })
    }
}
