use crate::errors::{ErrorMapper, SerializationError, WatsonResult};
use crate::transport::HttpResponse;
use crate::types::codec;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Maps a received response to exactly one typed outcome.
pub struct ResponseParser;

impl ResponseParser {
    /// Fails with the structured error when the status is not 2xx.
    pub fn check_status(response: &HttpResponse) -> WatsonResult<()> {
        if response.status.is_success() {
            Ok(())
        } else {
            Err(ErrorMapper::from_response(response.status, &response.headers, &response.body).into())
        }
    }

    pub fn decode<T: DeserializeOwned>(response: HttpResponse) -> WatsonResult<T> {
        Self::check_status(&response)?;
        Self::parse_json(&response.body)
    }

    /// For endpoints whose success carries no payload; any body is ignored.
    pub fn decode_empty(response: HttpResponse) -> WatsonResult<()> {
        Self::check_status(&response)
    }

    pub fn decode_bytes(response: HttpResponse) -> WatsonResult<Bytes> {
        Self::check_status(&response)?;
        Ok(response.body)
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> WatsonResult<T> {
        codec::decode_slice(data).map_err(|e| SerializationError::Decode(e).into())
    }
}
