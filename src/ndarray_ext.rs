//! ndarray integration for decoded arrays
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{DenseArray, NativeType, ScalarKind};
use ndarray::{ArrayD, IxDyn};
use thiserror::Error;

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdarrayError {
    #[error("requested {requested:?} elements but the array holds {actual:?}")]
    TypeMismatch {
        requested: (ScalarKind, usize),
        actual: (ScalarKind, usize),
    },

    #[error("shape {shape:?} doesn't match {len} elements")]
    ShapeMismatch { shape: Vec<usize>, len: usize },
}

impl DenseArray {
    /// Copy into an owned ndarray with the same shape
    ///
    /// `T` must match the element kind and width exactly. Fixed-width byte
    /// strings have no ndarray counterpart; read those through
    /// [`DenseArray::slot`].
    pub fn to_ndarray<T: NativeType>(&self) -> Result<ArrayD<T>, NdarrayError> {
        let actual = (self.element_type().kind, self.width());
        if (T::KIND, T::WIDTH) != actual {
            return Err(NdarrayError::TypeMismatch {
                requested: (T::KIND, T::WIDTH),
                actual,
            });
        }

        let elements: Vec<T> = self
            .as_bytes()
            .chunks_exact(T::WIDTH)
            .map(T::from_le_slice)
            .collect();
        let len = elements.len();

        ArrayD::from_shape_vec(IxDyn(self.shape()), elements).map_err(|_| {
            NdarrayError::ShapeMismatch {
                shape: self.shape().to_vec(),
                len,
            }
        })
    }
}
