//! HTTP endpoint value object.

use super::TaskDefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Absolute HTTP or HTTPS URL targeted by a task definition.
///
/// The URL is lowercased on construction and stored in that form; parsing
/// is only used to check its structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint(String);

impl Endpoint {
    /// Maximum accepted URL length.
    pub const MAX_LENGTH: usize = 2048;

    /// Creates a validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::EmptyEndpoint`],
    /// [`TaskDefinitionDomainError::EndpointTooLong`],
    /// [`TaskDefinitionDomainError::MalformedEndpoint`],
    /// [`TaskDefinitionDomainError::UnsupportedEndpointScheme`], or
    /// [`TaskDefinitionDomainError::MissingEndpointHost`] depending on which
    /// rule the URL breaks first.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDefinitionDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(TaskDefinitionDomainError::EmptyEndpoint);
        }

        // Lowercasing can lengthen some characters, so measure the stored form.
        let normalized = raw.to_lowercase();
        let length = normalized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskDefinitionDomainError::EndpointTooLong(length));
        }

        let parsed =
            Url::parse(&normalized).map_err(|err| TaskDefinitionDomainError::MalformedEndpoint {
                url: normalized.clone(),
                reason: err.to_string(),
            })?;

        let scheme = parsed.scheme();
        if !ALLOWED_SCHEMES.contains(&scheme) {
            return Err(TaskDefinitionDomainError::UnsupportedEndpointScheme(
                scheme.to_owned(),
            ));
        }

        // `http:host` parses leniently; require the explicit authority form.
        if !normalized.starts_with(&format!("{scheme}://")) {
            return Err(TaskDefinitionDomainError::MalformedEndpoint {
                url: normalized,
                reason: "missing '//' authority separator".to_owned(),
            });
        }

        let has_host = parsed
            .host_str()
            .is_some_and(|host| !host.trim().is_empty());
        if !has_host {
            return Err(TaskDefinitionDomainError::MissingEndpointHost(normalized));
        }

        Ok(Self(normalized))
    }

    /// Parses an endpoint from untyped text.
    ///
    /// # Errors
    ///
    /// See [`Endpoint::new`].
    pub fn of(value: &str) -> Result<Self, TaskDefinitionDomainError> {
        Self::new(value)
    }

    /// Returns the normalised URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the endpoint uses HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.0.starts_with("https://")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Endpoint {
    type Error = TaskDefinitionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.0
    }
}
