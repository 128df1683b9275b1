use crate::errors::{SerializationError, WatsonResult};
use bytes::{Bytes, BytesMut};
use futures::stream::{self, StreamExt, TryStreamExt};
use futures::Stream;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio_util::io::ReaderStream;

/// Request body stream handed to the transport.
pub type BodyStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

#[derive(Debug, Clone)]
enum PartContent {
    Inline(Bytes),
    /// Opened and streamed when the body is sent.
    File(PathBuf),
}

#[derive(Debug, Clone)]
struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    content: PartContent,
}

/// A `multipart/form-data` body with a unique boundary.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: format!("watson-boundary-{}", uuid::Uuid::new_v4().simple()),
            parts: Vec::new(),
        }
    }

    /// Adds a plain text field.
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            filename: None,
            content_type: None,
            content: PartContent::Inline(Bytes::from(value.into())),
        });
        self
    }

    /// Adds a field holding the JSON encoding of `value`.
    pub fn json<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> WatsonResult<Self> {
        let encoded = serde_json::to_vec(value)
            .map_err(|e| SerializationError::Encode(e.to_string()))?;
        self.parts.push(Part {
            name: name.to_string(),
            filename: None,
            content_type: Some("application/json".to_string()),
            content: PartContent::Inline(Bytes::from(encoded)),
        });
        Ok(self)
    }

    /// Adds an in-memory file part.
    pub fn bytes(
        mut self,
        name: &str,
        filename: &str,
        content_type: &str,
        data: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            content: PartContent::Inline(data.into()),
        });
        self
    }

    /// Adds a part read from disk at send time. The file name defaults to
    /// the last path component.
    pub fn file(mut self, name: &str, path: impl AsRef<Path>, content_type: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        self.parts.push(Part {
            name: name.to_string(),
            filename: Some(filename),
            content_type: Some(content_type.to_string()),
            content: PartContent::File(path),
        });
        self
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Paths of all file parts.
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.parts.iter().filter_map(|p| match &p.content {
            PartContent::File(path) => Some(path.as_path()),
            PartContent::Inline(_) => None,
        })
    }

    fn part_header(&self, part: &Part) -> Bytes {
        let mut header = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"",
            self.boundary,
            escape_quoted(&part.name)
        );
        if let Some(filename) = &part.filename {
            header.push_str(&format!("; filename=\"{}\"", escape_quoted(filename)));
        }
        header.push_str("\r\n");
        if let Some(content_type) = &part.content_type {
            header.push_str(&format!("Content-Type: {}\r\n", content_type));
        }
        header.push_str("\r\n");
        Bytes::from(header)
    }

    /// Encodes the form as a stream, opening file parts lazily in order.
    pub async fn into_stream(self) -> io::Result<BodyStream> {
        let mut pieces: Vec<BodyStream> = Vec::with_capacity(self.parts.len() * 3 + 1);

        for part in &self.parts {
            pieces.push(chunk(self.part_header(part)));
            match &part.content {
                PartContent::Inline(data) => pieces.push(chunk(data.clone())),
                PartContent::File(path) => {
                    let file = tokio::fs::File::open(path).await?;
                    pieces.push(Box::pin(ReaderStream::new(file)));
                }
            }
            pieces.push(chunk(Bytes::from_static(b"\r\n")));
        }
        pieces.push(chunk(Bytes::from(format!("--{}--\r\n", self.boundary))));

        Ok(Box::pin(stream::iter(pieces).flatten()))
    }

    /// Collects the whole encoded body into memory.
    pub async fn to_bytes(self) -> io::Result<Bytes> {
        let mut stream = self.into_stream().await?;
        let mut body = BytesMut::new();
        while let Some(piece) = stream.try_next().await? {
            body.extend_from_slice(&piece);
        }
        Ok(body.freeze())
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

fn chunk(data: Bytes) -> BodyStream {
    Box::pin(stream::iter(std::iter::once(Ok(data))))
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
