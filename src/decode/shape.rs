//! Destination shape derivation and the coordinate vector

use crate::error::ElementTypeError;
use crate::types::{ElementType, MAX_RANK};

/// Shape of the destination for a document with `count` top-level elements
///
/// `[count]` for plain scalars, `[count] ++ subarray` otherwise.
pub fn derive_shape(count: usize, element_type: &ElementType) -> Result<Vec<usize>, ElementTypeError> {
    let sub_shape = element_type.sub_shape();
    if 1 + sub_shape.len() > MAX_RANK {
        return Err(ElementTypeError::RankTooLarge {
            rank: 1 + sub_shape.len(),
            max: MAX_RANK,
        });
    }
    let mut shape = Vec::with_capacity(1 + sub_shape.len());
    shape.push(count);
    shape.extend_from_slice(sub_shape);
    Ok(shape)
}

/// Current write position, one index per destination dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    indices: Vec<usize>,
}

impl Coordinates {
    pub fn new(rank: usize) -> Self {
        Self {
            indices: vec![0; rank],
        }
    }

    pub fn set(&mut self, depth: usize, index: usize) {
        self.indices[depth] = index;
    }

    /// Full coordinates, for addressing a slot
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Indices down to and including `depth`, for error reports
    pub fn prefix(&self, depth: usize) -> Vec<usize> {
        self.indices[..=depth.min(self.indices.len().saturating_sub(1))].to_vec()
    }
}
