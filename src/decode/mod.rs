//! Decode a BSON document into a dense, fixed-width array
//!
//! Every top-level element becomes one row of the destination. The document
//! is validated before anything is allocated, and the first failure aborts
//! the whole conversion.

mod loader;
pub mod policy;
pub mod shape;

use crate::error::{ArrayError, DecodeError, ElementTypeError};
use crate::parser;
use crate::types::{DenseArray, ElementType};
use log::debug;
use shape::{Coordinates, derive_shape};

/// What to do when a variable-length value is wider than its slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Keep the leading bytes that fit
    #[default]
    Truncate,
    /// Fail with [`DecodeError::ValueTooLarge`]
    Error,
}

/// Options for [`decode_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub overflow: Overflow,
}

impl DecodeOptions {
    /// Reject oversized values instead of truncating them
    pub fn strict() -> Self {
        Self {
            overflow: Overflow::Error,
        }
    }
}

/// Decode `bytes` with the default options
pub fn decode(bytes: &[u8], element_type: &ElementType) -> Result<DenseArray, DecodeError> {
    decode_with(bytes, element_type, &DecodeOptions::default())
}

/// Decode `bytes` into an array of `element_type` slots
pub fn decode_with(
    bytes: &[u8],
    element_type: &ElementType,
    options: &DecodeOptions,
) -> Result<DenseArray, DecodeError> {
    let document = parser::parse(bytes)?;
    element_type.validate()?;

    let count = document.len();
    let shape = derive_shape(count, element_type)?;
    debug!(
        "decoding {} top-level elements as {} into shape {:?}",
        count, element_type, shape
    );

    let mut destination = DenseArray::zeros(element_type.clone(), shape).map_err(|e| match e {
        ArrayError::SizeOverflow => DecodeError::InvalidElementType(ElementTypeError::TooLarge),
        other => DecodeError::InvalidElementType(ElementTypeError::Syntax(other.to_string())),
    })?;
    let mut coordinates = Coordinates::new(destination.rank());

    let mut written = 0;
    for (i, entry) in document.iter().enumerate() {
        let (_, value) = entry?;
        coordinates.set(0, i);
        written += loader::load(&value, &mut coordinates, &mut destination, 0, options)?;
    }

    debug!("wrote {} slots of {} bytes", written, destination.width());
    Ok(destination)
}
