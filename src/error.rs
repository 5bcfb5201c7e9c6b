//! Error types for bsonarray

use crate::types::{ElementTag, ScalarKind};
use thiserror::Error;

/// Structural problem in the encoded document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("unexpected end of input at offset {offset}, needed {needed} more bytes")]
    UnexpectedEnd { offset: usize, needed: usize },

    #[error("document declares {declared} bytes but {actual} were given")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("invalid length {length} at offset {offset}")]
    InvalidLength { offset: usize, length: i32 },

    #[error("missing NUL terminator at offset {offset}")]
    MissingTerminator { offset: usize },

    #[error("invalid element tag 0x{tag:02X} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },

    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("invalid boolean byte 0x{value:02X} at offset {offset}")]
    InvalidBool { value: u8, offset: usize },

    #[error("documents nested deeper than {max} levels at offset {offset}")]
    TooDeep { offset: usize, max: usize },
}

/// Invalid destination element type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementTypeError {
    #[error("cannot parse element type {0:?}")]
    Syntax(String),

    #[error("unknown element kind {0:?}")]
    UnknownKind(char),

    #[error("big-endian element types are not supported")]
    BigEndian,

    #[error("width {width} is not valid for {kind:?} elements")]
    InvalidWidth { kind: ScalarKind, width: usize },

    #[error("sub-array shape must have at least one dimension")]
    EmptySubarray,

    #[error("rank {rank} exceeds the maximum of {max}")]
    RankTooLarge { rank: usize, max: usize },

    #[error("array size overflows the address space")]
    TooLarge,
}

/// A fixed-width scalar could not be coerced into a typed slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("value {value} does not fit in {kind:?} of width {width}")]
    OutOfRange {
        value: String,
        kind: ScalarKind,
        width: usize,
    },

    #[error("non-finite value cannot be stored as {kind:?}")]
    NotFinite { kind: ScalarKind },

    #[error("{tag} value cannot be stored as {kind:?}")]
    Incompatible { tag: ElementTag, kind: ScalarKind },
}

/// Dense array addressing and access errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("expected {expected} coordinates, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("coordinates {coordinates:?} out of bounds for shape {shape:?}")]
    OutOfBounds {
        coordinates: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("array size overflows the address space")]
    SizeOverflow,

    #[error("requested {requested:?} but array holds {actual:?}")]
    TypeMismatch {
        requested: (ScalarKind, usize),
        actual: (ScalarKind, usize),
    },

    #[error(transparent)]
    Scalar(#[from] ScalarError),
}

/// Why the document's nesting disagrees with the destination shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("array nested deeper than rank {rank}")]
    TooDeep { rank: usize },

    #[error("array has {actual} elements, shape expects {expected}")]
    Length { expected: usize, actual: usize },

    #[error("scalar at depth {depth} where rank {rank} expects an array")]
    MissingDimension { depth: usize, rank: usize },
}

/// Errors from decoding a document into a dense array
///
/// Every variant aborts the conversion; no partial array is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),

    #[error("invalid element type: {0}")]
    InvalidElementType(#[from] ElementTypeError),

    #[error("shape mismatch at {coordinates:?}: {reason}")]
    ShapeMismatch {
        coordinates: Vec<usize>,
        reason: ShapeError,
    },

    #[error("unsupported {tag} value at {coordinates:?}")]
    UnsupportedType {
        tag: ElementTag,
        coordinates: Vec<usize>,
    },

    #[error("value of {len} bytes at {coordinates:?} does not fit a {width}-byte slot")]
    ValueTooLarge {
        coordinates: Vec<usize>,
        len: usize,
        width: usize,
    },

    #[error("failed to load scalar at {coordinates:?}")]
    LoadFailed {
        coordinates: Vec<usize>,
        #[source]
        source: ScalarError,
    },
}

/// Errors from encoding a dense array into a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("encoding {element_type} arrays into documents is not supported")]
    Unsupported { element_type: String },
}
