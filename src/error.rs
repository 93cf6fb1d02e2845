//! Error types produced by the frame bridge.

use thiserror::Error;

/// Error raised while registering or attaching a frame element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The element is missing an attribute the bridge cannot work without.
    #[error("reactpy-frame must have a {attribute} attribute")]
    MissingAttribute {
        /// Name of the missing attribute.
        attribute: &'static str,
    },
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// A custom element with this name is already defined on the page.
    #[error("custom element `{0}` is already registered")]
    AlreadyRegistered(String),
    /// The frame configuration could not be read or is invalid.
    #[error("invalid frame configuration: {0}")]
    InvalidConfig(String),
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for FrameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<FrameError> for wasm_bindgen::JsValue {
    fn from(value: FrameError) -> Self {
        js_sys::Error::new(&value.to_string()).into()
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

/// Error returned when a frame query string cannot be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query string is empty.
    #[error("no files specified in query string")]
    Empty,
    /// The query string has no non-empty `file` parameter.
    #[error("no file specified in query string")]
    MissingFile,
    /// The query string has more than one `file` parameter.
    #[error("multiple files specified in query string")]
    MultipleFiles,
    /// A parameter does not decode to valid UTF-8.
    #[error("query string is not valid percent-encoded UTF-8")]
    InvalidEncoding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_names_the_attribute() {
        let error = FrameError::MissingAttribute { attribute: "file" };
        assert_eq!(
            error.to_string(),
            "reactpy-frame must have a file attribute"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let error: FrameError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(error, FrameError::InvalidConfig(_)));
    }

    #[test]
    fn query_error_display() {
        assert_eq!(
            QueryError::MultipleFiles.to_string(),
            "multiple files specified in query string"
        );
    }
}
