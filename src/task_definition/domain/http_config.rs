//! HTTP call configuration for a task definition.

use super::{Endpoint, HttpMethod, TaskDefinitionDomainError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Describes the HTTP call a task definition performs.
///
/// Headers and the payload template are optional and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HttpConfigFields")]
pub struct HttpConfig {
    endpoint: Endpoint,
    http_method: HttpMethod,
    timeout_seconds: u32,
    headers: BTreeMap<String, String>,
    payload_template: Map<String, Value>,
}

#[derive(Deserialize)]
struct HttpConfigFields {
    endpoint: Endpoint,
    http_method: HttpMethod,
    timeout_seconds: i64,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    payload_template: Map<String, Value>,
}

impl TryFrom<HttpConfigFields> for HttpConfig {
    type Error = TaskDefinitionDomainError;

    fn try_from(fields: HttpConfigFields) -> Result<Self, Self::Error> {
        Ok(
            Self::new(fields.endpoint, fields.http_method, fields.timeout_seconds)?
                .with_headers(fields.headers)?
                .with_payload_template(fields.payload_template),
        )
    }
}

impl HttpConfig {
    /// Minimum accepted timeout.
    pub const MIN_TIMEOUT_SECONDS: u32 = 1;
    /// Maximum timeout for `GET` requests.
    pub const MAX_GET_TIMEOUT_SECONDS: u32 = 300;

    /// Creates a configuration without headers or payload template.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::TimeoutTooShort`] when the
    /// timeout is below one second,
    /// [`TaskDefinitionDomainError::TimeoutOutOfRange`] when it does not fit
    /// in 32 bits, or [`TaskDefinitionDomainError::GetTimeoutTooLong`] for a
    /// `GET` longer than 300 seconds.
    pub fn new(
        endpoint: Endpoint,
        http_method: HttpMethod,
        timeout_seconds: i64,
    ) -> Result<Self, TaskDefinitionDomainError> {
        if timeout_seconds < i64::from(Self::MIN_TIMEOUT_SECONDS) {
            return Err(TaskDefinitionDomainError::TimeoutTooShort(timeout_seconds));
        }
        let timeout = u32::try_from(timeout_seconds)
            .map_err(|_| TaskDefinitionDomainError::TimeoutOutOfRange(timeout_seconds))?;
        if http_method == HttpMethod::Get && timeout > Self::MAX_GET_TIMEOUT_SECONDS {
            return Err(TaskDefinitionDomainError::GetTimeoutTooLong(timeout));
        }

        Ok(Self {
            endpoint,
            http_method,
            timeout_seconds: timeout,
            headers: BTreeMap::new(),
            payload_template: Map::new(),
        })
    }

    /// Sets the request headers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::EmptyHeaderKey`] or
    /// [`TaskDefinitionDomainError::InvalidHeaderKey`] for the first key that
    /// is blank or contains characters outside `[A-Za-z0-9-]`.
    pub fn with_headers(
        mut self,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, TaskDefinitionDomainError> {
        let collected: BTreeMap<String, String> = headers.into_iter().collect();
        for key in collected.keys() {
            check_header_key(key)?;
        }
        self.headers = collected;
        Ok(self)
    }

    /// Sets the payload template sent with each request.
    #[must_use]
    pub fn with_payload_template(mut self, template: Map<String, Value>) -> Self {
        self.payload_template = template;
        self
    }

    /// Returns the target endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    /// Returns the request timeout in seconds.
    #[must_use]
    pub const fn timeout_seconds(&self) -> u32 {
        self.timeout_seconds
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the payload template.
    #[must_use]
    pub const fn payload_template(&self) -> &Map<String, Value> {
        &self.payload_template
    }

    /// Returns `true` when at least one header is configured.
    #[must_use]
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Returns `true` when a non-empty payload template is configured.
    #[must_use]
    pub fn has_payload_template(&self) -> bool {
        !self.payload_template.is_empty()
    }
}

fn check_header_key(key: &str) -> Result<(), TaskDefinitionDomainError> {
    if key.trim().is_empty() {
        return Err(TaskDefinitionDomainError::EmptyHeaderKey);
    }
    let is_valid = key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !is_valid {
        return Err(TaskDefinitionDomainError::InvalidHeaderKey(key.to_owned()));
    }
    Ok(())
}
