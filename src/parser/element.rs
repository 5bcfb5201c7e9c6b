//! Element parsing: tag byte, key, value

use super::ByteCursor;
use super::primitives::u8_byte;
use super::string::cstring;
use super::value::parse_value;
use crate::error::DocumentError;
use crate::types::{ElementTag, ValueView};

/// Parse a single element (tag + key + value)
pub fn parse_element<'a>(
    cursor: &mut ByteCursor<'a>,
) -> Result<(&'a str, ValueView<'a>), DocumentError> {
    let offset = cursor.offset();
    let tag_byte = u8_byte(cursor)?;
    let tag = ElementTag::from_u8(tag_byte).ok_or(DocumentError::InvalidTag {
        tag: tag_byte,
        offset,
    })?;
    let key = cstring(cursor)?;
    let value = parse_value(tag, cursor)?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element() {
        let mut bytes = vec![ElementTag::Int32 as u8];
        bytes.extend_from_slice(b"count\0");
        bytes.extend_from_slice(&42i32.to_le_bytes());

        let mut cursor = ByteCursor::new(&bytes, 0);
        let (key, value) = parse_element(&mut cursor).unwrap();
        assert_eq!(key, "count");
        assert_eq!(value.as_i32(), Some(42));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_invalid_tag() {
        let bytes = [0x42, b'a', 0];
        let mut cursor = ByteCursor::new(&bytes, 3);
        assert_eq!(
            parse_element(&mut cursor),
            Err(DocumentError::InvalidTag {
                tag: 0x42,
                offset: 3
            })
        );
    }

    #[test]
    fn test_terminator_is_not_an_element() {
        let mut cursor = ByteCursor::new(&[0x00], 0);
        assert!(matches!(
            parse_element(&mut cursor),
            Err(DocumentError::InvalidTag { tag: 0, .. })
        ));
    }
}
