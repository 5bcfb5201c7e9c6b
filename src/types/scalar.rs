//! Fixed-width scalars and their coercion into typed slots

use super::{ElementTag, ScalarKind};
use crate::error::ScalarError;

/// A fixed-width source value, ready to be stored into a typed slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    DateTime(i64),
    ObjectId([u8; 12]),
}

impl Scalar {
    pub fn tag(&self) -> ElementTag {
        match self {
            Scalar::Int32(_) => ElementTag::Int32,
            Scalar::Int64(_) => ElementTag::Int64,
            Scalar::Double(_) => ElementTag::Double,
            Scalar::Bool(_) => ElementTag::Bool,
            Scalar::DateTime(_) => ElementTag::DateTime,
            Scalar::ObjectId(_) => ElementTag::ObjectId,
        }
    }

    /// Little-endian encoding at the value's natural width
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            Scalar::Int32(v) => v.to_le_bytes().to_vec(),
            Scalar::Int64(v) | Scalar::DateTime(v) => v.to_le_bytes().to_vec(),
            Scalar::Double(v) => v.to_le_bytes().to_vec(),
            Scalar::Bool(v) => vec![*v as u8],
            Scalar::ObjectId(oid) => oid.to_vec(),
        }
    }

    /// Write this value into `slot`, coercing it to `kind`
    ///
    /// `slot.len()` is the destination width. Raw byte slots are not handled
    /// here: their fit policy belongs to the caller.
    pub fn store(&self, kind: ScalarKind, slot: &mut [u8]) -> Result<(), ScalarError> {
        let incompatible = || ScalarError::Incompatible {
            tag: self.tag(),
            kind,
        };
        let n = match *self {
            Scalar::Int32(v) => v as i64,
            Scalar::Int64(v) | Scalar::DateTime(v) => v,
            Scalar::Bool(v) => v as i64,
            Scalar::Double(v) => return store_double(v, kind, slot).ok_or_else(incompatible)?,
            Scalar::ObjectId(_) => return Err(incompatible()),
        };
        match kind {
            ScalarKind::Bool => {
                slot[0] = (n != 0) as u8;
                Ok(())
            }
            ScalarKind::Int => store_int(n, slot),
            ScalarKind::UInt => {
                let u = u64::try_from(n).map_err(|_| ScalarError::OutOfRange {
                    value: n.to_string(),
                    kind,
                    width: slot.len(),
                })?;
                store_uint(u, slot)
            }
            ScalarKind::Float => store_float(n as f64, slot),
            ScalarKind::Bytes => Err(incompatible()),
        }
    }
}

/// `None` when `kind` cannot hold a double at all
fn store_double(v: f64, kind: ScalarKind, slot: &mut [u8]) -> Option<Result<(), ScalarError>> {
    let width = slot.len();
    let result = match kind {
        ScalarKind::Float => store_float(v, slot),
        ScalarKind::Bool => {
            slot[0] = (v != 0.0) as u8;
            Ok(())
        }
        ScalarKind::Int => float_to_i64(v, kind, width).and_then(|n| store_int(n, slot)),
        ScalarKind::UInt => float_to_u64(v, kind, width).and_then(|n| store_uint(n, slot)),
        ScalarKind::Bytes => return None,
    };
    Some(result)
}

fn store_int(n: i64, slot: &mut [u8]) -> Result<(), ScalarError> {
    let width = slot.len();
    let out_of_range = || ScalarError::OutOfRange {
        value: n.to_string(),
        kind: ScalarKind::Int,
        width,
    };
    match width {
        1 => slot.copy_from_slice(&i8::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        2 => slot.copy_from_slice(&i16::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        4 => slot.copy_from_slice(&i32::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        8 => slot.copy_from_slice(&n.to_le_bytes()),
        _ => return Err(out_of_range()),
    }
    Ok(())
}

fn store_uint(n: u64, slot: &mut [u8]) -> Result<(), ScalarError> {
    let width = slot.len();
    let out_of_range = || ScalarError::OutOfRange {
        value: n.to_string(),
        kind: ScalarKind::UInt,
        width,
    };
    match width {
        1 => slot.copy_from_slice(&u8::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        2 => slot.copy_from_slice(&u16::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        4 => slot.copy_from_slice(&u32::try_from(n).map_err(|_| out_of_range())?.to_le_bytes()),
        8 => slot.copy_from_slice(&n.to_le_bytes()),
        _ => return Err(out_of_range()),
    }
    Ok(())
}

fn store_float(v: f64, slot: &mut [u8]) -> Result<(), ScalarError> {
    match slot.len() {
        4 => slot.copy_from_slice(&(v as f32).to_le_bytes()),
        8 => slot.copy_from_slice(&v.to_le_bytes()),
        width => {
            return Err(ScalarError::OutOfRange {
                value: v.to_string(),
                kind: ScalarKind::Float,
                width,
            });
        }
    }
    Ok(())
}

// 2^63 and 2^64 are exactly representable; the upper bounds are exclusive
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

fn float_to_i64(v: f64, kind: ScalarKind, width: usize) -> Result<i64, ScalarError> {
    if !v.is_finite() {
        return Err(ScalarError::NotFinite { kind });
    }
    let t = v.trunc();
    if t < -I64_UPPER || t >= I64_UPPER {
        return Err(ScalarError::OutOfRange {
            value: v.to_string(),
            kind,
            width,
        });
    }
    Ok(t as i64)
}

fn float_to_u64(v: f64, kind: ScalarKind, width: usize) -> Result<u64, ScalarError> {
    if !v.is_finite() {
        return Err(ScalarError::NotFinite { kind });
    }
    let t = v.trunc();
    if t < 0.0 || t >= U64_UPPER {
        return Err(ScalarError::OutOfRange {
            value: v.to_string(),
            kind,
            width,
        });
    }
    Ok(t as u64)
}

/// Rust types that can be read back out of a numeric slot
pub trait NativeType: Copy + 'static {
    const KIND: ScalarKind;
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` little-endian bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! native_type {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl NativeType for $t {
                const KIND: ScalarKind = $kind;
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_le_bytes(buf)
                }
            }
        )*
    };
}

native_type! {
    u8 => ScalarKind::UInt,
    i8 => ScalarKind::Int,
    u16 => ScalarKind::UInt,
    i16 => ScalarKind::Int,
    u32 => ScalarKind::UInt,
    i32 => ScalarKind::Int,
    u64 => ScalarKind::UInt,
    i64 => ScalarKind::Int,
    f32 => ScalarKind::Float,
    f64 => ScalarKind::Float,
}

impl NativeType for bool {
    const KIND: ScalarKind = ScalarKind::Bool;
    const WIDTH: usize = 1;

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}
