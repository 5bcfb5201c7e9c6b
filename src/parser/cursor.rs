//! Zero-copy byte cursor for binary parsing

use crate::error::DocumentError;

/// Position within a byte slice; `take` hands out zero-copy sub-slices
///
/// `base` is the slice's offset within the top-level input, so error
/// offsets always refer to the caller's buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8], base: usize) -> Self {
        Self {
            data,
            position: 0,
            base,
        }
    }

    /// Absolute offset of the next unread byte
    pub fn offset(&self) -> usize {
        self.base + self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Unread bytes
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Look at the next `count` bytes without consuming them
    pub fn peek(&self, count: usize) -> Result<&'a [u8], DocumentError> {
        let available = self.data.len() - self.position;
        if count > available {
            return Err(DocumentError::UnexpectedEnd {
                offset: self.offset(),
                needed: count - available,
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Consume exactly `count` bytes
    pub fn take(&mut self, count: usize) -> Result<&'a [u8], DocumentError> {
        let slice = self.peek(count)?;
        self.position += count;
        Ok(slice)
    }
}
