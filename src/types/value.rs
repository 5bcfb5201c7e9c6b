//! Value types - owned and view variants

use super::{DocumentView, ElementTag};

/// Owned BSON value (for building/writing)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Double(f64),
    String(String),
    Document(Vec<(String, Value)>),
    Array(Vec<Value>),
    Binary { subtype: u8, data: Vec<u8> },
    Undefined,
    ObjectId([u8; 12]),
    Bool(bool),
    DateTime(i64),
    Null,
    Regex { pattern: String, options: String },
    DbPointer { namespace: String, id: [u8; 12] },
    Code(String),
    Symbol(String),
    CodeWithScope {
        code: String,
        scope: Vec<(String, Value)>,
    },
    Int32(i32),
    Timestamp { timestamp: u32, increment: u32 },
    Int64(i64),
    Decimal128([u8; 16]),
    MaxKey,
    MinKey,
}

impl Value {
    /// Get the tag for this value
    pub fn tag(&self) -> ElementTag {
        match self {
            Value::Double(_) => ElementTag::Double,
            Value::String(_) => ElementTag::String,
            Value::Document(_) => ElementTag::Document,
            Value::Array(_) => ElementTag::Array,
            Value::Binary { .. } => ElementTag::Binary,
            Value::Undefined => ElementTag::Undefined,
            Value::ObjectId(_) => ElementTag::ObjectId,
            Value::Bool(_) => ElementTag::Bool,
            Value::DateTime(_) => ElementTag::DateTime,
            Value::Null => ElementTag::Null,
            Value::Regex { .. } => ElementTag::Regex,
            Value::DbPointer { .. } => ElementTag::DbPointer,
            Value::Code(_) => ElementTag::Code,
            Value::Symbol(_) => ElementTag::Symbol,
            Value::CodeWithScope { .. } => ElementTag::CodeWithScope,
            Value::Int32(_) => ElementTag::Int32,
            Value::Timestamp { .. } => ElementTag::Timestamp,
            Value::Int64(_) => ElementTag::Int64,
            Value::Decimal128(_) => ElementTag::Decimal128,
            Value::MaxKey => ElementTag::MaxKey,
            Value::MinKey => ElementTag::MinKey,
        }
    }
}

// Convenience From impls for Value
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Parsed BSON value - references data in the underlying buffer (zero-copy)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueView<'a> {
    Double(f64),
    String(&'a str),
    Document(DocumentView<'a>),
    Array(DocumentView<'a>),
    Binary { subtype: u8, data: &'a [u8] },
    Undefined,
    ObjectId([u8; 12]),
    Bool(bool),
    DateTime(i64),
    Null,
    Regex { pattern: &'a str, options: &'a str },
    DbPointer { namespace: &'a str, id: [u8; 12] },
    Code(&'a str),
    Symbol(&'a str),
    CodeWithScope {
        code: &'a str,
        scope: DocumentView<'a>,
    },
    Int32(i32),
    Timestamp { timestamp: u32, increment: u32 },
    Int64(i64),
    Decimal128([u8; 16]),
    MaxKey,
    MinKey,
}

impl<'a> ValueView<'a> {
    /// Get the tag for this value
    pub fn tag(&self) -> ElementTag {
        match self {
            ValueView::Double(_) => ElementTag::Double,
            ValueView::String(_) => ElementTag::String,
            ValueView::Document(_) => ElementTag::Document,
            ValueView::Array(_) => ElementTag::Array,
            ValueView::Binary { .. } => ElementTag::Binary,
            ValueView::Undefined => ElementTag::Undefined,
            ValueView::ObjectId(_) => ElementTag::ObjectId,
            ValueView::Bool(_) => ElementTag::Bool,
            ValueView::DateTime(_) => ElementTag::DateTime,
            ValueView::Null => ElementTag::Null,
            ValueView::Regex { .. } => ElementTag::Regex,
            ValueView::DbPointer { .. } => ElementTag::DbPointer,
            ValueView::Code(_) => ElementTag::Code,
            ValueView::Symbol(_) => ElementTag::Symbol,
            ValueView::CodeWithScope { .. } => ElementTag::CodeWithScope,
            ValueView::Int32(_) => ElementTag::Int32,
            ValueView::Timestamp { .. } => ElementTag::Timestamp,
            ValueView::Int64(_) => ElementTag::Int64,
            ValueView::Decimal128(_) => ElementTag::Decimal128,
            ValueView::MaxKey => ElementTag::MaxKey,
            ValueView::MinKey => ElementTag::MinKey,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ValueView::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i32
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ValueView::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ValueView::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueView::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            ValueView::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as binary payload
    pub fn as_binary(&self) -> Option<&'a [u8]> {
        match self {
            ValueView::Binary { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Try to get as embedded document
    pub fn as_document(&self) -> Option<DocumentView<'a>> {
        match self {
            ValueView::Document(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as array
    pub fn as_array(&self) -> Option<DocumentView<'a>> {
        match self {
            ValueView::Array(a) => Some(*a),
            _ => None,
        }
    }
}
