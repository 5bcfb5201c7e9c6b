//! Dense, fixed-width n-dimensional array

use super::{ElementType, NativeType, Scalar};
use crate::error::ArrayError;

/// Owned dense array with row-major byte strides
///
/// Every slot is exactly `element_type.width` bytes and
/// `data.len() == product(shape) * width` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseArray {
    element_type: ElementType,
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<u8>,
}

impl DenseArray {
    /// Allocate a zero-filled array of `shape`
    pub fn zeros(element_type: ElementType, shape: Vec<usize>) -> Result<Self, ArrayError> {
        let width = element_type.width;
        let mut strides = vec![0usize; shape.len()];
        let mut stride = width;
        for (i, &dim) in shape.iter().enumerate().rev() {
            strides[i] = stride;
            stride = stride.checked_mul(dim).ok_or(ArrayError::SizeOverflow)?;
        }
        // `stride` is now the total byte length
        if stride > isize::MAX as usize {
            return Err(ArrayError::SizeOverflow);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(stride)
            .map_err(|_| ArrayError::SizeOverflow)?;
        data.resize(stride, 0);
        Ok(Self {
            element_type,
            shape,
            strides,
            data,
        })
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Byte strides, one per dimension
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Bytes per slot
    pub fn width(&self) -> usize {
        self.element_type.width
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of the slot at `coordinates`
    ///
    /// This is the only place slot addresses are computed.
    pub fn offset(&self, coordinates: &[usize]) -> Result<usize, ArrayError> {
        if coordinates.len() != self.shape.len() {
            return Err(ArrayError::RankMismatch {
                expected: self.shape.len(),
                actual: coordinates.len(),
            });
        }
        let mut offset = 0;
        for ((&index, &dim), &stride) in coordinates.iter().zip(&self.shape).zip(&self.strides) {
            if index >= dim {
                return Err(ArrayError::OutOfBounds {
                    coordinates: coordinates.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            offset += index * stride;
        }
        Ok(offset)
    }

    pub fn slot(&self, coordinates: &[usize]) -> Result<&[u8], ArrayError> {
        let start = self.offset(coordinates)?;
        Ok(&self.data[start..start + self.width()])
    }

    pub fn slot_mut(&mut self, coordinates: &[usize]) -> Result<&mut [u8], ArrayError> {
        let start = self.offset(coordinates)?;
        let end = start + self.width();
        Ok(&mut self.data[start..end])
    }

    /// Store a scalar with coercion to the element kind
    pub fn set_scalar(&mut self, coordinates: &[usize], scalar: Scalar) -> Result<(), ArrayError> {
        let kind = self.element_type.kind;
        let slot = self.slot_mut(coordinates)?;
        scalar.store(kind, slot).map_err(ArrayError::Scalar)
    }

    /// Read one slot as `T`, which must match the element kind and width
    pub fn get<T: NativeType>(&self, coordinates: &[usize]) -> Result<T, ArrayError> {
        if T::KIND != self.element_type.kind || T::WIDTH != self.width() {
            return Err(ArrayError::TypeMismatch {
                requested: (T::KIND, T::WIDTH),
                actual: (self.element_type.kind, self.width()),
            });
        }
        Ok(T::from_le_slice(self.slot(coordinates)?))
    }
}
