//! URI component percent-encoding.
//!
//! Every byte outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped as
//! `%XX`, so an encoded value is safe anywhere inside a query component.

use std::borrow::Cow;
use std::str::Utf8Error;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `raw` for use as a single URI component.
#[must_use]
pub fn encode_component(raw: &str) -> Cow<'_, str> {
    utf8_percent_encode(raw, COMPONENT).into()
}

/// Reverses [`encode_component`].
///
/// # Errors
///
/// Returns an error if the decoded bytes are not valid UTF-8.
pub fn decode_component(encoded: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(encoded).decode_utf8()
}
