//! Reading a frame query back the way the receiving server does.
//!
//! Pairs without `=` and pairs with an empty value are skipped, and `+` decodes
//! to a space. The bridge escapes `+`, so [`FileQuery::parse`] always recovers
//! the original attribute from a descriptor query.

use std::borrow::Cow;

use crate::{descriptor::FILE_PARAM, encoding::decode_component, error::QueryError};

/// The file requested by a frame query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    file: String,
}

impl FileQuery {
    /// Parses a search string such as `?file=guide%2Fintro.md`.
    ///
    /// # Errors
    ///
    /// Fails if the search is empty, has no `file` value, has more than one,
    /// or does not decode to UTF-8.
    pub fn parse(search: &str) -> Result<Self, QueryError> {
        if search.is_empty() {
            return Err(QueryError::Empty);
        }

        let mut file = None;
        for pair in search.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() || decode_form(key)? != FILE_PARAM {
                continue;
            }
            if file.is_some() {
                return Err(QueryError::MultipleFiles);
            }
            file = Some(decode_form(value)?.into_owned());
        }

        file.map(|file| Self { file })
            .ok_or(QueryError::MissingFile)
    }

    /// Returns the decoded file name.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Consumes the query, returning the decoded file name.
    #[must_use]
    pub fn into_file(self) -> String {
        self.file
    }
}

fn decode_form(raw: &str) -> Result<Cow<'_, str>, QueryError> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        decode_component(&spaced)
            .map(|decoded| Cow::Owned(decoded.into_owned()))
            .map_err(|_| QueryError::InvalidEncoding)
    } else {
        decode_component(raw).map_err(|_| QueryError::InvalidEncoding)
    }
}
