//! Depth-first walk of one top-level value into the destination array

use super::DecodeOptions;
use super::policy::{Fit, LeafError, WriteRule, rule_for, write_leaf};
use super::shape::Coordinates;
use crate::error::{ArrayError, DecodeError, ShapeError};
use crate::types::{DenseArray, ValueView};
use log::{debug, trace};

/// Load `value` at nesting `depth`, returning the number of slots written
///
/// `coordinates[..=depth]` must already point at `value`'s position. Array
/// values are walked in order, one dimension deeper per level; the first
/// failure is returned and remaining siblings are skipped.
pub fn load(
    value: &ValueView<'_>,
    coordinates: &mut Coordinates,
    destination: &mut DenseArray,
    depth: usize,
    options: &DecodeOptions,
) -> Result<usize, DecodeError> {
    let rank = destination.rank();

    match rule_for(value.tag()) {
        WriteRule::Descend => {
            let ValueView::Array(items) = value else {
                return Err(DecodeError::UnsupportedType {
                    tag: value.tag(),
                    coordinates: coordinates.prefix(depth),
                });
            };
            let next = depth + 1;
            if next >= rank {
                return Err(DecodeError::ShapeMismatch {
                    coordinates: coordinates.prefix(depth),
                    reason: ShapeError::TooDeep { rank },
                });
            }
            let expected = destination.shape()[next];

            let mut written = 0;
            let mut count = 0;
            for entry in items.iter() {
                let (_, item) = entry?;
                if count >= expected {
                    return Err(DecodeError::ShapeMismatch {
                        coordinates: coordinates.prefix(depth),
                        reason: ShapeError::Length {
                            expected,
                            actual: items.len(),
                        },
                    });
                }
                coordinates.set(next, count);
                written += load(&item, coordinates, destination, next, options)?;
                count += 1;
            }
            if count != expected {
                return Err(DecodeError::ShapeMismatch {
                    coordinates: coordinates.prefix(depth),
                    reason: ShapeError::Length {
                        expected,
                        actual: count,
                    },
                });
            }
            Ok(written)
        }
        WriteRule::Unsupported => Err(DecodeError::UnsupportedType {
            tag: value.tag(),
            coordinates: coordinates.prefix(depth),
        }),
        _ => {
            if depth + 1 != rank {
                return Err(DecodeError::ShapeMismatch {
                    coordinates: coordinates.prefix(depth),
                    reason: ShapeError::MissingDimension { depth, rank },
                });
            }
            write_slot(value, coordinates, destination, options)?;
            Ok(1)
        }
    }
}

fn write_slot(
    value: &ValueView<'_>,
    coordinates: &Coordinates,
    destination: &mut DenseArray,
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    let position = coordinates.as_slice();

    match write_leaf(value, destination, position, options) {
        Ok(Fit::Truncated) => {
            debug!(
                "truncated {} value at {:?} to {} bytes",
                value.tag().name(),
                position,
                destination.width()
            );
            Ok(())
        }
        Ok(fit) => {
            trace!("wrote {} at {:?} ({:?})", value.tag().name(), position, fit);
            Ok(())
        }
        Err(LeafError::Unsupported(tag)) => Err(DecodeError::UnsupportedType {
            tag,
            coordinates: position.to_vec(),
        }),
        Err(LeafError::TooLarge { len, width }) => Err(DecodeError::ValueTooLarge {
            coordinates: position.to_vec(),
            len,
            width,
        }),
        Err(LeafError::Scalar(source)) => Err(DecodeError::LoadFailed {
            coordinates: position.to_vec(),
            source,
        }),
        Err(LeafError::Slot(error)) => Err(slot_error(error, position)),
    }
}

/// The loader checks bounds before addressing, so this only maps the error
fn slot_error(error: ArrayError, position: &[usize]) -> DecodeError {
    let reason = match error {
        ArrayError::OutOfBounds { shape, .. } => ShapeError::Length {
            expected: shape.first().copied().unwrap_or(0),
            actual: position.first().map_or(0, |&i| i + 1),
        },
        _ => ShapeError::MissingDimension {
            depth: position.len(),
            rank: position.len(),
        },
    };
    DecodeError::ShapeMismatch {
        coordinates: position.to_vec(),
        reason,
    }
}
