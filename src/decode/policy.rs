//! Per-tag write policy: how a source value lands in a fixed-width slot

use super::{DecodeOptions, Overflow};
use crate::error::{ArrayError, ScalarError};
use crate::types::{DenseArray, ElementTag, ScalarKind, Scalar, ValueView};

/// What to do with a value of a given tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRule {
    /// Coerce through the destination's typed setter
    NativeScalar,
    /// Raw bytes, zero-padded or truncated to the slot width
    CopyWithFit,
    /// Seconds at offset 0, increment at offset 4
    TimestampLayout,
    /// Pattern, one NUL byte, options
    RegexLayout,
    /// Not a leaf: iterate into the next dimension
    Descend,
    Unsupported,
}

/// The policy table
pub const fn rule_for(tag: ElementTag) -> WriteRule {
    match tag {
        ElementTag::Int32
        | ElementTag::Int64
        | ElementTag::Double
        | ElementTag::Bool
        | ElementTag::DateTime
        | ElementTag::ObjectId => WriteRule::NativeScalar,
        ElementTag::String
        | ElementTag::Binary
        | ElementTag::Symbol
        | ElementTag::Code
        | ElementTag::Document => WriteRule::CopyWithFit,
        ElementTag::Timestamp => WriteRule::TimestampLayout,
        ElementTag::Regex => WriteRule::RegexLayout,
        ElementTag::Array => WriteRule::Descend,
        ElementTag::Undefined
        | ElementTag::Null
        | ElementTag::MaxKey
        | ElementTag::MinKey
        | ElementTag::DbPointer
        | ElementTag::CodeWithScope
        | ElementTag::Decimal128 => WriteRule::Unsupported,
    }
}

/// How a byte source was fitted into its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Exact,
    Padded,
    Truncated,
}

/// Leaf failure, before the loader attaches coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafError {
    Unsupported(ElementTag),
    TooLarge { len: usize, width: usize },
    Scalar(ScalarError),
    /// The coordinates do not address a slot
    Slot(ArrayError),
}

/// Copy `source` into `slot`, zero-filling or truncating to `slot.len()`
///
/// Truncation is silent under [`Overflow::Truncate`]; never writes outside
/// `slot`.
pub fn copy_with_fit(source: &[u8], slot: &mut [u8], overflow: Overflow) -> Result<Fit, LeafError> {
    let width = slot.len();
    let len = source.len();
    if len > width {
        if overflow == Overflow::Error {
            return Err(LeafError::TooLarge { len, width });
        }
        slot.copy_from_slice(&source[..width]);
        return Ok(Fit::Truncated);
    }
    slot[..len].copy_from_slice(source);
    slot[len..].fill(0);
    Ok(if len == width { Fit::Exact } else { Fit::Padded })
}

/// Bytes of a timestamp as laid out in a slot
pub fn timestamp_layout(timestamp: u32, increment: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&timestamp.to_le_bytes());
    out[4..].copy_from_slice(&increment.to_le_bytes());
    out
}

/// Bytes of a regex as laid out in a slot
pub fn regex_layout(pattern: &str, options: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(pattern.len() + 1 + options.len());
    out.extend_from_slice(pattern.as_bytes());
    out.push(0);
    out.extend_from_slice(options.as_bytes());
    out
}

/// Write one leaf value into the slot at `coordinates` according to its
/// tag's rule
///
/// Numeric targets go through [`DenseArray::set_scalar`]; everything else is
/// laid out as bytes and fitted into the slot.
pub fn write_leaf(
    value: &ValueView<'_>,
    destination: &mut DenseArray,
    coordinates: &[usize],
    options: &DecodeOptions,
) -> Result<Fit, LeafError> {
    let scalar = match *value {
        ValueView::Int32(v) => Scalar::Int32(v),
        ValueView::Int64(v) => Scalar::Int64(v),
        ValueView::Double(v) => Scalar::Double(v),
        ValueView::Bool(v) => Scalar::Bool(v),
        ValueView::DateTime(v) => Scalar::DateTime(v),
        ValueView::ObjectId(v) => Scalar::ObjectId(v),
        ValueView::String(s) | ValueView::Symbol(s) | ValueView::Code(s) => {
            return fit_into(s.as_bytes(), destination, coordinates, options);
        }
        ValueView::Binary { data, .. } => return fit_into(data, destination, coordinates, options),
        ValueView::Document(doc) => {
            return fit_into(doc.as_bytes(), destination, coordinates, options);
        }
        ValueView::Timestamp {
            timestamp,
            increment,
        } => {
            let bytes = timestamp_layout(timestamp, increment);
            return fit_into(&bytes, destination, coordinates, options);
        }
        ValueView::Regex { pattern, options: flags } => {
            let bytes = regex_layout(pattern, flags);
            return fit_into(&bytes, destination, coordinates, options);
        }
        ValueView::Array(_)
        | ValueView::Undefined
        | ValueView::Null
        | ValueView::MaxKey
        | ValueView::MinKey
        | ValueView::DbPointer { .. }
        | ValueView::CodeWithScope { .. }
        | ValueView::Decimal128(_) => return Err(LeafError::Unsupported(value.tag())),
    };

    if destination.element_type().kind == ScalarKind::Bytes {
        return fit_into(&scalar.to_le_bytes(), destination, coordinates, options);
    }
    destination
        .set_scalar(coordinates, scalar)
        .map_err(|e| match e {
            ArrayError::Scalar(source) => LeafError::Scalar(source),
            other => LeafError::Slot(other),
        })?;
    Ok(Fit::Exact)
}

fn fit_into(
    source: &[u8],
    destination: &mut DenseArray,
    coordinates: &[usize],
    options: &DecodeOptions,
) -> Result<Fit, LeafError> {
    let slot = destination.slot_mut(coordinates).map_err(LeafError::Slot)?;
    copy_with_fit(source, slot, options.overflow)
}
