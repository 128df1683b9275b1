use crate::client::ServiceConfig;
use crate::errors::{ValidationError, WatsonError, WatsonResult};
use crate::transport::{
    ArrayFormat, Endpoint, EndpointBody, EndpointParts, HttpBody, HttpRequest, QueryValue,
    ServiceInfo,
};
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Characters escaped inside a single path segment. Non-ASCII is always escaped.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";
const LEARNING_OPT_OUT_HEADER: &str = "x-watson-learning-opt-out";
const DEFAULT_ACCEPT: &str = "application/json";

/// Turns an [`Endpoint`] into an [`HttpRequest`] against one service
/// configuration. Performs no I/O.
pub struct RequestBuilder<'a> {
    config: &'a ServiceConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ServiceConfig) -> Self {
        Self { config }
    }

    /// Resolves URL, headers and body for one call.
    pub fn draft(&self, endpoint: Endpoint) -> WatsonResult<HttpRequest> {
        let parts = endpoint.into_parts();

        let base = self.config.service_url.as_ref().ok_or(WatsonError::NoEndpoint)?;

        if let Some(name) = &parts.invalid_header {
            return Err(ValidationError::InvalidHeader(name.clone()).into());
        }

        let path = expand_path(&parts.path_template, &parts.path_params)?;
        let url = self.build_url(base, &path, &parts)?;
        let mut headers = self.sdk_headers(parts.service, parts.operation)?;

        overlay(&mut headers, &self.config.default_headers);
        overlay(&mut headers, &parts.headers);

        let accept = parts.accept.as_deref().unwrap_or(DEFAULT_ACCEPT);
        headers.insert(ACCEPT, header_value("Accept", accept)?);

        let body = match parts.body {
            EndpointBody::None => HttpBody::Empty,
            EndpointBody::Json(bytes) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                HttpBody::Bytes(bytes)
            }
            EndpointBody::Binary { data, content_type } => {
                headers.insert(CONTENT_TYPE, header_value("Content-Type", &content_type)?);
                HttpBody::Bytes(data)
            }
            EndpointBody::Multipart(form) => {
                headers.insert(CONTENT_TYPE, header_value("Content-Type", &form.content_type())?);
                HttpBody::Multipart(form)
            }
        };

        Ok(HttpRequest {
            method: parts.method,
            url,
            headers,
            body,
            timeout: self.config.timeout,
        })
    }

    /// Appends the expanded path to the service URL, which carries no query
    /// or fragment once the config is validated. Query values are
    /// form-encoded, so a space is written as `+`.
    fn build_url(&self, base: &Url, path: &str, parts: &EndpointParts) -> WatsonResult<Url> {
        let base = base.as_str().trim_end_matches('/');
        let separator = if path.starts_with('/') { "" } else { "/" };
        let mut url = Url::parse(&format!("{}{}{}", base, separator, path))?;

        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(version) = &self.config.version {
            pairs.push(("version", version.clone()));
        }
        for (name, value) in &parts.query {
            match value {
                QueryValue::Single(value) => pairs.push((name.as_str(), value.clone())),
                QueryValue::List(values, ArrayFormat::Repeated) => {
                    pairs.extend(values.iter().map(|v| (name.as_str(), v.clone())));
                }
                QueryValue::List(values, ArrayFormat::CommaSeparated) => {
                    pairs.push((name.as_str(), values.join(",")));
                }
            }
        }

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn sdk_headers(
        &self,
        service: Option<ServiceInfo>,
        operation: Option<&'static str>,
    ) -> WatsonResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &self.config.user_agent)?);

        if let Some(service) = service {
            let mut analytics = format!(
                "service_name={};service_version={}",
                service.name, service.version
            );
            if let Some(operation) = operation {
                analytics.push_str(";operation_id=");
                analytics.push_str(operation);
            }
            headers.insert(
                HeaderName::from_static(ANALYTICS_HEADER),
                header_value(ANALYTICS_HEADER, &analytics)?,
            );
        }

        if self.config.learning_opt_out {
            headers.insert(
                HeaderName::from_static(LEARNING_OPT_OUT_HEADER),
                HeaderValue::from_static("true"),
            );
        }

        Ok(headers)
    }
}

/// Substitutes `{name}` placeholders, encoding each value as one segment.
fn expand_path(template: &str, params: &[(String, String)]) -> WatsonResult<String> {
    let mut path = String::with_capacity(template.len());
    let mut used = vec![false; params.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            WatsonError::UrlEncoding(format!("unterminated placeholder in `{}`", template))
        })?;
        let name = &after[..close];

        let index = params
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| WatsonError::UrlEncoding(format!("no value for path parameter `{}`", name)))?;
        let value = &params[index].1;
        if value.is_empty() || value == "." || value == ".." {
            return Err(WatsonError::UrlEncoding(format!(
                "path parameter `{}` cannot be encoded as a path segment: {:?}",
                name, value
            )));
        }

        used[index] = true;
        path.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[close + 1..];
    }
    path.push_str(rest);

    if let Some(index) = used.iter().position(|u| !u) {
        return Err(WatsonError::UrlEncoding(format!(
            "path parameter `{}` does not appear in `{}`",
            params[index].0, template
        )));
    }

    Ok(path)
}

fn overlay(target: &mut HeaderMap, source: &HeaderMap) {
    for name in source.keys() {
        target.remove(name);
        for value in source.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

fn header_value(name: &str, value: &str) -> WatsonResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ValidationError::InvalidHeader(name.to_string()).into())
}
