//! Endpoint descriptors: the data shape of one REST operation.

use crate::errors::{SerializationError, WatsonResult};
use crate::transport::MultipartForm;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::str::FromStr;

/// How a list-valued query parameter is written on the wire.
///
/// Watson services disagree on this, so each endpoint picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayFormat {
    /// `name=a&name=b`
    Repeated,
    /// `name=a,b`
    CommaSeparated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>, ArrayFormat),
}

#[derive(Debug)]
pub enum EndpointBody {
    None,
    /// Already-encoded JSON.
    Json(Bytes),
    Multipart(MultipartForm),
    Binary { data: Bytes, content_type: String },
}

impl EndpointBody {
    pub fn is_none(&self) -> bool {
        matches!(self, EndpointBody::None)
    }
}

/// Identifies a service in the `X-IBMCloud-SDK-Analytics` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// Starts an endpoint tagged with this service and the given operation id.
    pub fn endpoint(&self, method: Method, path_template: &str, operation: &'static str) -> Endpoint {
        let mut endpoint = Endpoint::new(method, path_template);
        endpoint.service = Some(*self);
        endpoint.operation = Some(operation);
        endpoint
    }
}

/// Description of a single request, consumed once by the request builder.
#[derive(Debug)]
pub struct Endpoint {
    method: Method,
    path_template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, QueryValue)>,
    headers: HeaderMap,
    invalid_header: Option<String>,
    accept: Option<String>,
    body: EndpointBody,
    service: Option<ServiceInfo>,
    operation: Option<&'static str>,
}

impl Endpoint {
    pub fn new(method: Method, path_template: impl Into<String>) -> Self {
        Self {
            method,
            path_template: path_template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            invalid_header: None,
            accept: None,
            body: EndpointBody::None,
            service: None,
            operation: None,
        }
    }

    pub fn get(path_template: impl Into<String>) -> Self {
        Self::new(Method::GET, path_template)
    }

    pub fn post(path_template: impl Into<String>) -> Self {
        Self::new(Method::POST, path_template)
    }

    pub fn put(path_template: impl Into<String>) -> Self {
        Self::new(Method::PUT, path_template)
    }

    pub fn delete(path_template: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path_template)
    }

    /// Supplies the value for a `{name}` placeholder in the path template.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query
            .push((name.into(), QueryValue::Single(value.to_string())));
        self
    }

    /// Adds the parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Adds a list-valued parameter; an empty list is omitted.
    pub fn query_list<I, V>(mut self, name: impl Into<String>, values: I, format: ArrayFormat) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if !values.is_empty() {
            self.query.push((name.into(), QueryValue::List(values, format)));
        }
        self
    }

    /// Adds a caller header. An invalid name or value is reported when the
    /// request is built.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (HeaderName::from_str(name), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => {
                self.invalid_header.get_or_insert_with(|| name.to_string());
            }
        }
        self
    }

    pub fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Merges caller headers, replacing earlier values of the same name.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for name in headers.keys() {
            self.headers.remove(name);
            for value in headers.get_all(name) {
                self.headers.append(name.clone(), value.clone());
            }
        }
        self
    }

    /// Overrides the default `application/json` Accept header.
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.accept = Some(media_type.into());
        self
    }

    /// Encodes `payload` as the JSON body. Fails before any I/O happens.
    pub fn json_body<T: Serialize + ?Sized>(mut self, payload: &T) -> WatsonResult<Self> {
        let bytes = serde_json::to_vec(payload)
            .map_err(|e| SerializationError::Encode(e.to_string()))?;
        self.body = EndpointBody::Json(Bytes::from(bytes));
        Ok(self)
    }

    /// Like [`json_body`](Self::json_body), but sends no body at all when the
    /// payload encodes to `null` or `{}`.
    pub fn optional_json_body<T: Serialize + ?Sized>(mut self, payload: &T) -> WatsonResult<Self> {
        let value = crate::types::codec::encode_value(payload)
            .map_err(|e| SerializationError::Encode(e.to_string()))?;
        let empty = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            self.body = EndpointBody::None;
            return Ok(self);
        }
        let bytes = serde_json::to_vec(&value)
            .map_err(|e| SerializationError::Encode(e.to_string()))?;
        self.body = EndpointBody::Json(Bytes::from(bytes));
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = EndpointBody::Multipart(form);
        self
    }

    /// Sends caller bytes unmodified.
    pub fn binary(mut self, data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        self.body = EndpointBody::Binary {
            data: data.into(),
            content_type: content_type.into(),
        };
        self
    }

    pub fn operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn path_params(&self) -> &[(String, String)] {
        &self.path_params
    }

    pub fn query_items(&self) -> &[(String, QueryValue)] {
        &self.query
    }

    pub fn caller_headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn invalid_header(&self) -> Option<&str> {
        self.invalid_header.as_deref()
    }

    pub fn accept_override(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    pub fn body(&self) -> &EndpointBody {
        &self.body
    }

    pub fn service(&self) -> Option<ServiceInfo> {
        self.service
    }

    pub fn operation_id(&self) -> Option<&'static str> {
        self.operation
    }

    pub(crate) fn into_parts(self) -> EndpointParts {
        EndpointParts {
            method: self.method,
            path_template: self.path_template,
            path_params: self.path_params,
            query: self.query,
            headers: self.headers,
            invalid_header: self.invalid_header,
            accept: self.accept,
            body: self.body,
            service: self.service,
            operation: self.operation,
        }
    }
}

pub(crate) struct EndpointParts {
    pub method: Method,
    pub path_template: String,
    pub path_params: Vec<(String, String)>,
    pub query: Vec<(String, QueryValue)>,
    pub headers: HeaderMap,
    pub invalid_header: Option<String>,
    pub accept: Option<String>,
    pub body: EndpointBody,
    pub service: Option<ServiceInfo>,
    pub operation: Option<&'static str>,
}
