//! Zero-copy document view

use super::ValueView;
use crate::error::DocumentError;
use crate::parser::{ByteCursor, parse_element};

/// View into an encoded document (or array) stored in the input buffer
///
/// The bytes span the whole encoding: length prefix, elements and the
/// trailing NUL. Views handed out by [`crate::parser::parse`] have already
/// been validated, so iteration only fails on views built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentView<'a> {
    bytes: &'a [u8],
    base: usize,
}

impl<'a> DocumentView<'a> {
    /// `base` is the offset of `bytes` within the top-level input, used
    /// for error positions.
    pub(crate) fn new(bytes: &'a [u8], base: usize) -> Self {
        Self { bytes, base }
    }

    /// Raw encoded bytes, including length prefix and terminator
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of this document within the top-level input
    pub fn offset(&self) -> usize {
        self.base
    }

    /// Iterate `(key, value)` pairs in document order
    pub fn iter(&self) -> Elements<'a> {
        // Body sits between the 4-byte length prefix and the trailing NUL
        let body = match self.bytes.len() {
            n if n >= 5 => &self.bytes[4..n - 1],
            _ => &[],
        };
        Elements {
            cursor: ByteCursor::new(body, self.base + 4),
            done: false,
        }
    }

    /// Number of elements
    ///
    /// Counts elements up to the first malformed one. Views returned by
    /// [`crate::parser::parse`] never stop early; use [`Self::try_len`] on
    /// views that have not been validated.
    pub fn len(&self) -> usize {
        self.iter().take_while(Result::is_ok).count()
    }

    /// Number of elements, or the first parse error
    pub fn try_len(&self) -> Result<usize, DocumentError> {
        self.iter().try_fold(0, |n, entry| entry.map(|_| n + 1))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// First value stored under `key`
    ///
    /// Stops at the first malformed element, like [`Self::len`].
    pub fn get(&self, key: &str) -> Option<ValueView<'a>> {
        self.iter()
            .map_while(Result::ok)
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for DocumentView<'a> {
    type Item = Result<(&'a str, ValueView<'a>), DocumentError>;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`DocumentView`]
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    cursor: ByteCursor<'a>,
    done: bool,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Result<(&'a str, ValueView<'a>), DocumentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor.is_empty() {
            return None;
        }
        let result = parse_element(&mut self.cursor);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
