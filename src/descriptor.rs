use serde::Serialize;

use crate::{encoding::encode_component, error::FrameError};

/// Query parameter that carries the requested file.
pub const FILE_PARAM: &str = "file";

/// Where a rendering client should connect to.
///
/// Serializes to the shape `@reactpy/client` expects:
/// `{ "serverLocation": { "url", "route", "query" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDescriptor {
    server_location: ServerLocation,
}

/// The server location half of a [`ConnectionDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerLocation {
    /// Base URL of the server, captured once per page.
    pub url: String,
    /// Path of the page at the moment the frame attached, unmodified.
    pub route: String,
    /// `?file=` followed by the percent-encoded file name.
    pub query: String,
}

impl ConnectionDescriptor {
    /// Builds a descriptor for `file`, encoding it into the query.
    #[must_use]
    pub fn new(url: impl Into<String>, route: impl Into<String>, file: &str) -> Self {
        Self {
            server_location: ServerLocation {
                url: url.into(),
                route: route.into(),
                query: format!("?{FILE_PARAM}={}", encode_component(file)),
            },
        }
    }

    /// Returns the server location.
    #[must_use]
    pub const fn server_location(&self) -> &ServerLocation {
        &self.server_location
    }

    /// Returns the base URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.server_location.url
    }

    /// Returns the captured route.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.server_location.route
    }

    /// Returns the query string, including the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.server_location.query
    }

    /// Serializes the descriptor into the JSON object handed to the client.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, FrameError> {
        Ok(serde_json::to_string(self)?)
    }
}
