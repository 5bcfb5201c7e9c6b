//! Value serialization

use crate::types::Value;
use std::io;

/// Append an encoded document (length prefix, elements, terminator)
pub fn write_document(buf: &mut Vec<u8>, entries: &[(String, Value)]) -> io::Result<()> {
    let start = buf.len();
    buf.extend_from_slice(&[0u8; 4]);
    for (key, value) in entries {
        write_element(buf, key, value)?;
    }
    buf.push(0);
    patch_length(buf, start)
}

fn write_array(buf: &mut Vec<u8>, items: &[Value]) -> io::Result<()> {
    let start = buf.len();
    buf.extend_from_slice(&[0u8; 4]);
    for (i, item) in items.iter().enumerate() {
        write_element(buf, &i.to_string(), item)?;
    }
    buf.push(0);
    patch_length(buf, start)
}

/// Write one element: tag, key, value
pub fn write_element(buf: &mut Vec<u8>, key: &str, value: &Value) -> io::Result<()> {
    buf.push(value.tag() as u8);
    write_cstring(buf, key, "key")?;
    match value {
        Value::Double(f) => buf.extend_from_slice(&f.to_le_bytes()),
        Value::String(s) | Value::Code(s) | Value::Symbol(s) => write_string(buf, s)?,
        Value::Document(entries) => write_document(buf, entries)?,
        Value::Array(items) => write_array(buf, items)?,
        Value::Binary { subtype, data } => {
            buf.extend_from_slice(&length_i32(data.len())?.to_le_bytes());
            buf.push(*subtype);
            buf.extend_from_slice(data);
        }
        Value::Undefined | Value::Null | Value::MaxKey | Value::MinKey => {}
        Value::ObjectId(id) => buf.extend_from_slice(id),
        Value::Bool(b) => buf.push(if *b { 1 } else { 0 }),
        Value::DateTime(ms) => buf.extend_from_slice(&ms.to_le_bytes()),
        Value::Regex { pattern, options } => {
            write_cstring(buf, pattern, "regex pattern")?;
            write_cstring(buf, options, "regex options")?;
        }
        Value::DbPointer { namespace, id } => {
            write_string(buf, namespace)?;
            buf.extend_from_slice(id);
        }
        Value::CodeWithScope { code, scope } => {
            let start = buf.len();
            buf.extend_from_slice(&[0u8; 4]);
            write_string(buf, code)?;
            write_document(buf, scope)?;
            patch_length(buf, start)?;
        }
        Value::Int32(i) => buf.extend_from_slice(&i.to_le_bytes()),
        Value::Timestamp {
            timestamp,
            increment,
        } => {
            buf.extend_from_slice(&increment.to_le_bytes());
            buf.extend_from_slice(&timestamp.to_le_bytes());
        }
        Value::Int64(i) => buf.extend_from_slice(&i.to_le_bytes()),
        Value::Decimal128(bytes) => buf.extend_from_slice(bytes),
    }
    Ok(())
}

fn write_cstring(buf: &mut Vec<u8>, s: &str, what: &str) -> io::Result<()> {
    if s.contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} contains NUL: {:?}", what, s),
        ));
    }
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) -> io::Result<()> {
    buf.extend_from_slice(&length_i32(s.len() + 1)?.to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    Ok(())
}

/// Fill in the 4-byte length reserved at `start`
fn patch_length(buf: &mut [u8], start: usize) -> io::Result<()> {
    let len = length_i32(buf.len() - start)?;
    buf[start..start + 4].copy_from_slice(&len.to_le_bytes());
    Ok(())
}

fn length_i32(len: usize) -> io::Result<i32> {
    i32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("length {} exceeds i32::MAX", len),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_int32_element() {
        let mut buf = Vec::new();
        write_element(&mut buf, "a", &Value::Int32(1)).unwrap();
        assert_eq!(buf, vec![0x10, b'a', 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_write_string_element() {
        let mut buf = Vec::new();
        write_element(&mut buf, "s", &Value::from("hi")).unwrap();
        assert_eq!(buf, vec![0x02, b's', 0, 3, 0, 0, 0, b'h', b'i', 0]);
    }

    #[test]
    fn test_write_array_keys() {
        let mut buf = Vec::new();
        write_element(&mut buf, "x", &Value::from(vec![7i32, 8])).unwrap();
        let expected = vec![
            0x04, b'x', 0, // tag, key
            19, 0, 0, 0, // array length
            0x10, b'0', 0, 7, 0, 0, 0, // "0": 7
            0x10, b'1', 0, 8, 0, 0, 0, // "1": 8
            0,
        ];
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_write_timestamp_order() {
        let mut buf = Vec::new();
        let ts = Value::Timestamp {
            timestamp: 1,
            increment: 2,
        };
        write_element(&mut buf, "t", &ts).unwrap();
        assert_eq!(&buf[3..], &[2, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_regex_with_nul_rejected() {
        let mut buf = Vec::new();
        let regex = Value::Regex {
            pattern: "a\0b".into(),
            options: String::new(),
        };
        let err = write_element(&mut buf, "r", &regex).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
