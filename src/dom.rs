use web_sys::{Document, Element, HtmlElement, Window};

use crate::{bridge::FrameSource, error::FrameError};

impl FrameSource for HtmlElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn current_route(&self) -> Result<String, FrameError> {
        let document = self.owner_document().map_or_else(document, Ok)?;
        let location = document.location().ok_or(FrameError::DomUnavailable)?;
        Ok(location.pathname()?)
    }
}

/// Returns the document of the current window.
pub fn document() -> Result<Document, FrameError> {
    let window: Window = web_sys::window().ok_or(FrameError::DomUnavailable)?;
    window.document().ok_or(FrameError::DomUnavailable)
}

/// Returns `document.location.origin`.
pub fn document_origin() -> Result<String, FrameError> {
    let location = document()?.location().ok_or(FrameError::DomUnavailable)?;
    location.origin().map_err(FrameError::from)
}

/// Removes every child of `element`.
pub fn clear(element: &Element) -> Result<(), FrameError> {
    while let Some(child) = element.first_child() {
        element.remove_child(&child)?;
    }
    Ok(())
}

/// Returns `true` if `tag_name` is already defined on the page.
pub fn is_defined(tag_name: &str) -> Result<bool, FrameError> {
    let window: Window = web_sys::window().ok_or(FrameError::DomUnavailable)?;
    let registry = window.custom_elements();
    Ok(!registry.get(tag_name).is_undefined())
}
