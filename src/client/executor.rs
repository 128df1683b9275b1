//! Single linear request lifecycle: build, authenticate, send, decode.

use crate::auth::AuthProvider;
use crate::client::ServiceConfig;
use crate::errors::{ErrorMapper, WatsonError, WatsonResult};
use crate::transport::{
    Endpoint, EndpointBody, HttpRequest, HttpResponse, HttpTransport, RequestBuilder,
    ResponseParser,
};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Runs one call per invocation and delivers exactly one outcome.
///
/// Holds only read-only configuration and shared collaborators, so a single
/// executor serves any number of concurrent calls.
pub struct RequestExecutor {
    config: ServiceConfig,
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl RequestExecutor {
    pub fn new(
        config: ServiceConfig,
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            config,
            transport,
            auth,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Executes a request and decodes the JSON response into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> WatsonResult<T> {
        ResponseParser::decode(self.send(endpoint).await?)
    }

    /// Executes a request whose success carries no payload.
    pub async fn execute_empty(&self, endpoint: Endpoint) -> WatsonResult<()> {
        ResponseParser::decode_empty(self.send(endpoint).await?)
    }

    /// Executes a request and returns the raw success body.
    pub async fn execute_bytes(&self, endpoint: Endpoint) -> WatsonResult<Bytes> {
        ResponseParser::decode_bytes(self.send(endpoint).await?)
    }

    /// Executes a request and returns the whole response once its status is
    /// known to be 2xx.
    pub async fn execute_raw(&self, endpoint: Endpoint) -> WatsonResult<HttpResponse> {
        let response = self.send(endpoint).await?;
        ResponseParser::check_status(&response)?;
        Ok(response)
    }

    /// Streams a 2xx response body into `destination` and returns its path.
    ///
    /// A partially written file is removed when the transfer fails.
    pub async fn download(
        &self,
        endpoint: Endpoint,
        destination: impl AsRef<Path>,
    ) -> WatsonResult<PathBuf> {
        let destination = destination.as_ref().to_path_buf();
        let request = self.prepare(endpoint).await?;

        let response = match self.transport.send_streaming(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "download failed before a response was received");
                return Err(e.into());
            }
        };
        debug!(status = response.status.as_u16(), "received download response");

        let mut body = response.body;

        if !response.status.is_success() {
            let mut buffer = BytesMut::new();
            while let Some(chunk) = body.next().await {
                buffer.extend_from_slice(&chunk?);
            }
            return Err(ErrorMapper::from_response(response.status, &response.headers, &buffer).into());
        }

        let mut file = tokio::fs::File::create(&destination)
            .await
            .map_err(|e| WatsonError::file(&destination, e))?;

        let written = async {
            while let Some(chunk) = body.next().await {
                let chunk = chunk?;
                file.write_all(&chunk)
                    .await
                    .map_err(|e| WatsonError::file(&destination, e))?;
            }
            file.flush()
                .await
                .map_err(|e| WatsonError::file(&destination, e))
        }
        .await;

        if let Err(e) = written {
            warn!(error = %e, path = %destination.display(), "download interrupted");
            drop(file);
            let _ = tokio::fs::remove_file(&destination).await;
            return Err(e);
        }

        Ok(destination)
    }

    async fn send(&self, endpoint: Endpoint) -> WatsonResult<HttpResponse> {
        let request = self.prepare(endpoint).await?;

        match self.transport.send(request).await {
            Ok(response) => {
                debug!(status = response.status.as_u16(), "received response");
                Ok(response)
            }
            Err(e) => {
                warn!(error = %e, "request failed before a response was received");
                Err(e.into())
            }
        }
    }

    async fn prepare(&self, endpoint: Endpoint) -> WatsonResult<HttpRequest> {
        if let EndpointBody::Multipart(form) = endpoint.body() {
            for path in form.file_paths() {
                tokio::fs::metadata(path)
                    .await
                    .map_err(|e| WatsonError::file(path, e))?;
            }
        }

        let operation = endpoint.operation_id().unwrap_or("-");
        let mut request = RequestBuilder::new(&self.config).draft(endpoint)?;
        self.auth.authenticate(&mut request).await?;

        debug!(
            method = %request.method,
            path = request.url.path(),
            operation,
            "sending request"
        );

        Ok(request)
    }
}
