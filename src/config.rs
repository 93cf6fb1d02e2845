use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// Tag under which the frame element is registered by default.
pub const DEFAULT_TAG_NAME: &str = "reactpy-frame";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the frames on a page connect to.
///
/// Serialized as an optional string: `null` means the document origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum BaseUrl {
    /// `document.location.origin`, read once when the element is registered.
    DocumentOrigin,
    /// A fixed server URL.
    Fixed(String),
}

impl BaseUrl {
    /// Returns the base URL baked in at compile time through
    /// `REACTPY_FRAME_BASE_URL`, falling back to the document origin.
    #[must_use]
    pub fn from_build_env() -> Self {
        option_env!("REACTPY_FRAME_BASE_URL")
            .filter(|url| !url.is_empty())
            .map_or(Self::DocumentOrigin, |url| Self::Fixed(url.to_owned()))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl From<Option<String>> for BaseUrl {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::DocumentOrigin, Self::Fixed)
    }
}

impl From<BaseUrl> for Option<String> {
    fn from(value: BaseUrl) -> Self {
        match value {
            BaseUrl::DocumentOrigin => None,
            BaseUrl::Fixed(url) => Some(url),
        }
    }
}

/// Local development server the documentation is previewed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServer {
    /// Host name, `localhost` by default.
    pub host: String,
    /// Port, `5000` by default.
    pub port: u16,
}

impl Default for DevServer {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5000,
        }
    }
}

impl DevServer {
    /// Returns the HTTP URL of the server.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Configuration used when registering the frame element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameConfig {
    /// Custom element name.
    pub tag_name: String,
    /// Where frames connect to, unless a development server is set.
    pub base_url: BaseUrl,
    /// Development server overriding `base_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,
    /// Log filter directive, e.g. `info` or `reactpy_frame=debug`.
    pub log_level: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            base_url: BaseUrl::default(),
            dev_server: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FrameConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration object and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] for malformed JSON or an invalid tag name.
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the custom element name.
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Points every frame at a development server.
    #[must_use]
    pub fn with_dev_server(mut self, dev_server: DevServer) -> Self {
        self.dev_server = Some(dev_server);
        self
    }

    /// Sets the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Checks that the tag name is a valid custom element name.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] if the name does not start with a
    /// lowercase ASCII letter, contains no hyphen, or has uppercase letters.
    pub fn validate(&self) -> Result<(), FrameError> {
        let name = self.tag_name.as_str();
        let valid = name.starts_with(|c: char| c.is_ascii_lowercase())
            && name.contains('-')
            && !name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace());
        if valid {
            Ok(())
        } else {
            Err(FrameError::InvalidConfig(format!(
                "`{name}` is not a valid custom element name"
            )))
        }
    }

    /// Resolves the URL frames connect to. `document_origin` is only called
    /// when neither a development server nor a fixed URL is configured.
    ///
    /// # Errors
    ///
    /// Propagates the error of `document_origin`.
    pub fn resolve_base_url(
        &self,
        document_origin: impl FnOnce() -> Result<String, FrameError>,
    ) -> Result<String, FrameError> {
        if let Some(dev_server) = &self.dev_server {
            return Ok(dev_server.url());
        }
        match &self.base_url {
            BaseUrl::Fixed(url) => Ok(url.clone()),
            BaseUrl::DocumentOrigin => document_origin(),
        }
    }
}
