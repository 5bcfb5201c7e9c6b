//! Binary parser for BSON documents
//!
//! Zero-copy parsing that returns views into the input buffer.

mod cursor;
mod element;
mod primitives;
mod string;
mod value;

pub use cursor::ByteCursor;
pub use element::parse_element;
pub use value::parse_value;

use crate::error::DocumentError;
use crate::types::{DocumentView, ValueView};

/// Deepest document/array nesting accepted by [`parse`]
pub const MAX_NESTING: usize = 100;

/// Smallest possible document: length prefix plus terminator
const MIN_DOCUMENT_SIZE: usize = 5;

/// Validate a complete document and return a view over it
///
/// The whole tree is checked up front, so iterating the returned view (and
/// any nested view obtained from it) cannot fail.
pub fn parse(bytes: &[u8]) -> Result<DocumentView<'_>, DocumentError> {
    if bytes.len() < 4 {
        return Err(DocumentError::UnexpectedEnd {
            offset: bytes.len(),
            needed: 4 - bytes.len(),
        });
    }

    let declared = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if declared < MIN_DOCUMENT_SIZE as i32 {
        return Err(DocumentError::InvalidLength {
            offset: 0,
            length: declared,
        });
    }
    if declared as usize != bytes.len() {
        return Err(DocumentError::LengthMismatch {
            declared: declared as usize,
            actual: bytes.len(),
        });
    }
    if bytes[bytes.len() - 1] != 0 {
        return Err(DocumentError::MissingTerminator {
            offset: bytes.len() - 1,
        });
    }

    let document = DocumentView::new(bytes, 0);
    validate(document, 0)?;
    Ok(document)
}

/// Check that `bytes` is a well-formed document
pub fn validate_bytes(bytes: &[u8]) -> Result<(), DocumentError> {
    parse(bytes).map(|_| ())
}

fn validate(document: DocumentView<'_>, depth: usize) -> Result<(), DocumentError> {
    if depth >= MAX_NESTING {
        return Err(DocumentError::TooDeep {
            offset: document.offset(),
            max: MAX_NESTING,
        });
    }
    for entry in document.iter() {
        let (_, value) = entry?;
        match value {
            ValueView::Document(nested)
            | ValueView::Array(nested)
            | ValueView::CodeWithScope { scope: nested, .. } => validate(nested, depth + 1)?,
            _ => {}
        }
    }
    Ok(())
}
