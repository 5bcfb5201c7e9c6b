//! Little-endian primitive readers

use super::ByteCursor;
use crate::error::DocumentError;

pub fn u8_byte(cursor: &mut ByteCursor<'_>) -> Result<u8, DocumentError> {
    Ok(cursor.take(1)?[0])
}

pub fn i32_le(cursor: &mut ByteCursor<'_>) -> Result<i32, DocumentError> {
    let b = cursor.take(4)?;
    Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub fn u32_le(cursor: &mut ByteCursor<'_>) -> Result<u32, DocumentError> {
    let b = cursor.take(4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub fn i64_le(cursor: &mut ByteCursor<'_>) -> Result<i64, DocumentError> {
    let b = cursor.take(8)?;
    Ok(i64::from_le_bytes([
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
    ]))
}

pub fn f64_le(cursor: &mut ByteCursor<'_>) -> Result<f64, DocumentError> {
    let b = cursor.take(8)?;
    Ok(f64::from_le_bytes([
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
    ]))
}

/// Length prefix that must be non-negative
pub fn length_le(cursor: &mut ByteCursor<'_>) -> Result<usize, DocumentError> {
    let offset = cursor.offset();
    let length = i32_le(cursor)?;
    usize::try_from(length).map_err(|_| DocumentError::InvalidLength { offset, length })
}

pub fn bytes12(cursor: &mut ByteCursor<'_>) -> Result<[u8; 12], DocumentError> {
    let mut out = [0u8; 12];
    out.copy_from_slice(cursor.take(12)?);
    Ok(out)
}

pub fn bytes16(cursor: &mut ByteCursor<'_>) -> Result<[u8; 16], DocumentError> {
    let mut out = [0u8; 16];
    out.copy_from_slice(cursor.take(16)?);
    Ok(out)
}
