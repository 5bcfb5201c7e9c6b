//! Value parsing

use super::ByteCursor;
use super::primitives::{bytes12, bytes16, f64_le, i32_le, i64_le, length_le, u8_byte, u32_le};
use super::string::{cstring, string};
use crate::error::DocumentError;
use crate::types::{DocumentView, ElementTag, ValueView};

/// Binary subtype whose payload repeats its own length
const BINARY_OLD: u8 = 0x02;

/// Parse the value of an element whose tag has already been consumed
pub fn parse_value<'a>(
    tag: ElementTag,
    cursor: &mut ByteCursor<'a>,
) -> Result<ValueView<'a>, DocumentError> {
    let value = match tag {
        ElementTag::Double => ValueView::Double(f64_le(cursor)?),
        ElementTag::String => ValueView::String(string(cursor)?),
        ElementTag::Document => ValueView::Document(document(cursor)?),
        ElementTag::Array => ValueView::Array(document(cursor)?),
        ElementTag::Binary => {
            let (subtype, data) = binary(cursor)?;
            ValueView::Binary { subtype, data }
        }
        ElementTag::Undefined => ValueView::Undefined,
        ElementTag::ObjectId => ValueView::ObjectId(bytes12(cursor)?),
        ElementTag::Bool => {
            let offset = cursor.offset();
            match u8_byte(cursor)? {
                0 => ValueView::Bool(false),
                1 => ValueView::Bool(true),
                value => return Err(DocumentError::InvalidBool { value, offset }),
            }
        }
        ElementTag::DateTime => ValueView::DateTime(i64_le(cursor)?),
        ElementTag::Null => ValueView::Null,
        ElementTag::Regex => {
            let pattern = cstring(cursor)?;
            let options = cstring(cursor)?;
            ValueView::Regex { pattern, options }
        }
        ElementTag::DbPointer => {
            let namespace = string(cursor)?;
            let id = bytes12(cursor)?;
            ValueView::DbPointer { namespace, id }
        }
        ElementTag::Code => ValueView::Code(string(cursor)?),
        ElementTag::Symbol => ValueView::Symbol(string(cursor)?),
        ElementTag::CodeWithScope => {
            let start = cursor.offset();
            let total = length_le(cursor)?;
            let code = string(cursor)?;
            let scope = document(cursor)?;
            if cursor.offset() - start != total {
                return Err(DocumentError::InvalidLength {
                    offset: start,
                    length: total as i32,
                });
            }
            ValueView::CodeWithScope { code, scope }
        }
        ElementTag::Int32 => ValueView::Int32(i32_le(cursor)?),
        ElementTag::Timestamp => {
            // Stored increment first, then seconds
            let increment = u32_le(cursor)?;
            let timestamp = u32_le(cursor)?;
            ValueView::Timestamp {
                timestamp,
                increment,
            }
        }
        ElementTag::Int64 => ValueView::Int64(i64_le(cursor)?),
        ElementTag::Decimal128 => ValueView::Decimal128(bytes16(cursor)?),
        ElementTag::MaxKey => ValueView::MaxKey,
        ElementTag::MinKey => ValueView::MinKey,
    };
    Ok(value)
}

/// Embedded document or array: framing is checked, contents are not
fn document<'a>(cursor: &mut ByteCursor<'a>) -> Result<DocumentView<'a>, DocumentError> {
    let start = cursor.offset();
    let prefix = cursor.peek(4)?;
    let length = i32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    if length < 5 {
        return Err(DocumentError::InvalidLength {
            offset: start,
            length,
        });
    }
    let bytes = cursor.take(length as usize)?;
    if bytes[bytes.len() - 1] != 0 {
        return Err(DocumentError::MissingTerminator {
            offset: start + bytes.len() - 1,
        });
    }
    Ok(DocumentView::new(bytes, start))
}

fn binary<'a>(cursor: &mut ByteCursor<'a>) -> Result<(u8, &'a [u8]), DocumentError> {
    let start = cursor.offset();
    let len = length_le(cursor)?;
    let subtype = u8_byte(cursor)?;
    let data = cursor.take(len)?;
    if subtype != BINARY_OLD {
        return Ok((subtype, data));
    }
    let inner = match data {
        [a, b, c, d, ..] => i32::from_le_bytes([*a, *b, *c, *d]),
        _ => {
            return Err(DocumentError::InvalidLength {
                offset: start,
                length: len as i32,
            });
        }
    };
    if inner < 0 || inner as usize != len - 4 {
        return Err(DocumentError::InvalidLength {
            offset: start + 5,
            length: inner,
        });
    }
    Ok((subtype, &data[4..]))
}
