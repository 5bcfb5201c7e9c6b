//! Serialization of BSON documents

mod value;

use crate::types::Value;
use std::io::{self, Write};

pub use value::write_element;
use value::write_document;

/// Write a document made of `entries` to a writer
pub fn write<W: Write>(writer: &mut W, entries: &[(String, Value)]) -> io::Result<()> {
    let bytes = to_bytes(entries)?;
    writer.write_all(&bytes)
}

/// Encode a document made of `entries`
pub fn to_bytes(entries: &[(String, Value)]) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_document(&mut buf, entries)?;
    Ok(buf)
}
