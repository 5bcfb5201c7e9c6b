//! BSON element type tags

use std::fmt;

/// Element type tags, as they appear before each key in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementTag {
    Double = 0x01,
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    Undefined = 0x06,
    ObjectId = 0x07,
    Bool = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Regex = 0x0B,
    DbPointer = 0x0C,
    Code = 0x0D,
    Symbol = 0x0E,
    CodeWithScope = 0x0F,
    Int32 = 0x10,
    Timestamp = 0x11,
    Int64 = 0x12,
    Decimal128 = 0x13,
    MaxKey = 0x7F,
    MinKey = 0xFF,
}

impl ElementTag {
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(ElementTag::Double),
            0x02 => Some(ElementTag::String),
            0x03 => Some(ElementTag::Document),
            0x04 => Some(ElementTag::Array),
            0x05 => Some(ElementTag::Binary),
            0x06 => Some(ElementTag::Undefined),
            0x07 => Some(ElementTag::ObjectId),
            0x08 => Some(ElementTag::Bool),
            0x09 => Some(ElementTag::DateTime),
            0x0A => Some(ElementTag::Null),
            0x0B => Some(ElementTag::Regex),
            0x0C => Some(ElementTag::DbPointer),
            0x0D => Some(ElementTag::Code),
            0x0E => Some(ElementTag::Symbol),
            0x0F => Some(ElementTag::CodeWithScope),
            0x10 => Some(ElementTag::Int32),
            0x11 => Some(ElementTag::Timestamp),
            0x12 => Some(ElementTag::Int64),
            0x13 => Some(ElementTag::Decimal128),
            0x7F => Some(ElementTag::MaxKey),
            0xFF => Some(ElementTag::MinKey),
            _ => None,
        }
    }

    /// Lower-case name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ElementTag::Double => "double",
            ElementTag::String => "string",
            ElementTag::Document => "document",
            ElementTag::Array => "array",
            ElementTag::Binary => "binary",
            ElementTag::Undefined => "undefined",
            ElementTag::ObjectId => "objectid",
            ElementTag::Bool => "bool",
            ElementTag::DateTime => "datetime",
            ElementTag::Null => "null",
            ElementTag::Regex => "regex",
            ElementTag::DbPointer => "dbpointer",
            ElementTag::Code => "code",
            ElementTag::Symbol => "symbol",
            ElementTag::CodeWithScope => "code_w_scope",
            ElementTag::Int32 => "int32",
            ElementTag::Timestamp => "timestamp",
            ElementTag::Int64 => "int64",
            ElementTag::Decimal128 => "decimal128",
            ElementTag::MaxKey => "maxkey",
            ElementTag::MinKey => "minkey",
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_roundtrips_every_tag() {
        for byte in 0..=u8::MAX {
            if let Some(tag) = ElementTag::from_u8(byte) {
                assert_eq!(tag as u8, byte);
            }
        }
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(ElementTag::from_u8(0x00), None);
        assert_eq!(ElementTag::from_u8(0x14), None);
        assert_eq!(ElementTag::from_u8(0x80), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ElementTag::Null.to_string(), "null (0x0A)");
        assert_eq!(ElementTag::MinKey.to_string(), "minkey (0xFF)");
    }
}
