//! bsonarray - Decode BSON documents into dense, fixed-width arrays
//!
//! Each top-level element of a document becomes one row of a strided,
//! row-major array whose slots all share one element type. Numeric values
//! are coerced into the slot type, strings and blobs are zero-padded or
//! truncated to the slot width, and nested arrays fill declared sub-array
//! dimensions.
//!
//! # Features
//!
//! - Zero-copy, fully validating document parser
//! - numpy-style element type strings (`"<i4"`, `"|S5"`, `"(3,)<f8"`)
//! - Explicit per-tag write policy; unsupported tags fail instead of being skipped
//! - Optional conversion to `ndarray` (feature `ndarray`)
//!
//! # Example
//!
//! ```rust
//! use bsonarray::{ElementType, Value, decode, writer};
//!
//! let bytes = writer::to_bytes(&[
//!     ("a".into(), Value::from(vec![1i32, 2, 3])),
//!     ("b".into(), Value::from(vec![4i32, 5, 6])),
//! ])
//! .unwrap();
//!
//! let element_type: ElementType = "(3,)<i4".parse().unwrap();
//! let array = decode(&bytes, &element_type).unwrap();
//!
//! assert_eq!(array.shape(), &[2, 3]);
//! assert_eq!(array.get::<i32>(&[1, 2]).unwrap(), 6);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod parser;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use decode::{DecodeOptions, Overflow, decode, decode_with};
pub use encode::encode;
pub use error::{
    ArrayError, DecodeError, DocumentError, ElementTypeError, EncodeError, ScalarError, ShapeError,
};
pub use parser::{MAX_NESTING, parse};
pub use types::{
    DenseArray, DocumentView, ElementTag, ElementType, MAX_RANK, NativeType, Scalar, ScalarKind,
    Value, ValueView,
};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::NdarrayError;
