//! String parsing helpers

use super::ByteCursor;
use super::primitives::length_le;
use crate::error::DocumentError;

/// NUL-terminated UTF-8 string (keys, regex parts)
pub fn cstring<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a str, DocumentError> {
    let offset = cursor.offset();
    let len = cursor
        .remaining()
        .iter()
        .position(|&b| b == 0)
        .ok_or(DocumentError::MissingTerminator {
            offset: offset + cursor.remaining().len(),
        })?;
    let bytes = cursor.take(len + 1)?;
    std::str::from_utf8(&bytes[..len]).map_err(|_| DocumentError::InvalidUtf8 { offset })
}

/// int32 length-prefixed UTF-8 string; the length counts the trailing NUL
pub fn string<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a str, DocumentError> {
    let offset = cursor.offset();
    let len = length_le(cursor)?;
    if len == 0 {
        return Err(DocumentError::InvalidLength { offset, length: 0 });
    }
    let bytes = cursor.take(len)?;
    if bytes[len - 1] != 0 {
        return Err(DocumentError::MissingTerminator {
            offset: offset + 4 + len - 1,
        });
    }
    std::str::from_utf8(&bytes[..len - 1]).map_err(|_| DocumentError::InvalidUtf8 {
        offset: offset + 4,
    })
}
