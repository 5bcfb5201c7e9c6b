//! Core types: document values on the source side, dense arrays on the
//! destination side

mod array;
mod document;
mod dtype;
mod scalar;
mod tag;
mod value;

pub use array::DenseArray;
pub use document::{DocumentView, Elements};
pub use dtype::{ElementType, MAX_RANK, ScalarKind};
pub use scalar::{NativeType, Scalar};
pub use tag::ElementTag;
pub use value::{Value, ValueView};
