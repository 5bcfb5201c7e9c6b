//! Integration tests for bsonarray
//!
//! These tests demonstrate decoding documents into dense arrays end to end.

use bsonarray::{
    DecodeError, DecodeOptions, DocumentError, ElementTag, ElementType, ElementTypeError,
    EncodeError, ScalarError, ScalarKind, ShapeError, Value, decode, decode_with, encode, parse,
    writer,
};

fn document(entries: Vec<(&str, Value)>) -> Vec<u8> {
    let entries: Vec<(String, Value)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    writer::to_bytes(&entries).unwrap()
}

// =============================================================================
// Basic scenarios
// =============================================================================

#[test]
fn decode_int_scalars() {
    let bytes = document(vec![("a", Value::Int32(1)), ("b", Value::Int32(2))]);
    let dt: ElementType = "<i4".parse().unwrap();

    let array = decode(&bytes, &dt).unwrap();
    assert_eq!(array.shape(), &[2]);
    assert_eq!(array.strides(), &[4]);
    assert_eq!(array.get::<i32>(&[0]).unwrap(), 1);
    assert_eq!(array.get::<i32>(&[1]).unwrap(), 2);
}

#[test]
fn decode_string_padded() {
    let bytes = document(vec![("a", Value::from("hi"))]);
    let dt: ElementType = "|S5".parse().unwrap();

    let array = decode(&bytes, &dt).unwrap();
    assert_eq!(array.shape(), &[1]);
    assert_eq!(array.as_bytes(), &[b'h', b'i', 0, 0, 0]);
}

#[test]
fn decode_subarray_rows() {
    let bytes = document(vec![("a", Value::from(vec![1i32, 2, 3]))]);
    let dt: ElementType = "(3,)<i4".parse().unwrap();

    let array = decode(&bytes, &dt).unwrap();
    assert_eq!(array.shape(), &[1, 3]);
    assert_eq!(array.strides(), &[12, 4]);
    let row: Vec<i32> = (0..3).map(|j| array.get::<i32>(&[0, j]).unwrap()).collect();
    assert_eq!(row, vec![1, 2, 3]);
}

#[test]
fn decode_matrix_rows() {
    let row = |base: f64| {
        Value::Array(vec![
            Value::from(vec![base, base + 1.0]),
            Value::from(vec![base + 2.0, base + 3.0]),
        ])
    };
    let bytes = document(vec![("m0", row(0.0)), ("m1", row(10.0))]);
    let dt: ElementType = "(2,2)<f8".parse().unwrap();

    let array = decode(&bytes, &dt).unwrap();
    assert_eq!(array.shape(), &[2, 2, 2]);
    assert_eq!(array.get::<f64>(&[0, 1, 0]).unwrap(), 2.0);
    assert_eq!(array.get::<f64>(&[1, 1, 1]).unwrap(), 13.0);
}

#[test]
fn decode_mixed_numeric_tags() {
    let bytes = document(vec![
        ("i", Value::Int32(-7)),
        ("l", Value::Int64(40)),
        ("d", Value::Double(3.9)),
        ("b", Value::Bool(true)),
        ("t", Value::DateTime(1_700_000_000_000)),
    ]);

    let array = decode(&bytes, &ElementType::int(8)).unwrap();
    let values: Vec<i64> = (0..5).map(|i| array.get::<i64>(&[i]).unwrap()).collect();
    assert_eq!(values, vec![-7, 40, 3, 1, 1_700_000_000_000]);
}

#[test]
fn decode_into_bool_and_float() {
    let bytes = document(vec![("a", Value::Int32(0)), ("b", Value::Double(0.5))]);

    let bools = decode(&bytes, &ElementType::bool()).unwrap();
    assert!(!bools.get::<bool>(&[0]).unwrap());
    assert!(bools.get::<bool>(&[1]).unwrap());

    let floats = decode(&bytes, &"<f4".parse().unwrap()).unwrap();
    assert_eq!(floats.get::<f32>(&[1]).unwrap(), 0.5);
}

// =============================================================================
// Byte layouts
// =============================================================================

#[test]
fn decode_binary_and_code() {
    let bytes = document(vec![
        (
            "bin",
            Value::Binary {
                subtype: 0,
                data: vec![0xDE, 0xAD],
            },
        ),
        ("code", Value::Code("f()".into())),
        ("sym", Value::Symbol("ab".into())),
    ]);

    let array = decode(&bytes, &ElementType::bytes(4)).unwrap();
    assert_eq!(
        array.as_bytes(),
        &[0xDE, 0xAD, 0, 0, b'f', b'(', b')', 0, b'a', b'b', 0, 0]
    );
}

#[test]
fn decode_timestamp_layout() {
    let bytes = document(vec![(
        "ts",
        Value::Timestamp {
            timestamp: 0x0102_0304,
            increment: 7,
        },
    )]);

    let array = decode(&bytes, &ElementType::bytes(8)).unwrap();
    assert_eq!(array.as_bytes(), &[4, 3, 2, 1, 7, 0, 0, 0]);

    // A narrow slot keeps only the seconds
    let array = decode(&bytes, &ElementType::bytes(4)).unwrap();
    assert_eq!(array.as_bytes(), &[4, 3, 2, 1]);
}

#[test]
fn decode_regex_layout() {
    let bytes = document(vec![(
        "re",
        Value::Regex {
            pattern: "ab+".into(),
            options: "i".into(),
        },
    )]);

    let array = decode(&bytes, &ElementType::bytes(8)).unwrap();
    assert_eq!(array.as_bytes(), b"ab+\0i\0\0\0");
}

#[test]
fn decode_embedded_document_as_blob() {
    let inner = vec![("x".to_string(), Value::Int32(5))];
    let inner_bytes = writer::to_bytes(&inner).unwrap();
    let bytes = document(vec![("doc", Value::Document(inner))]);

    let array = decode(&bytes, &ElementType::bytes(32)).unwrap();
    assert_eq!(&array.as_bytes()[..inner_bytes.len()], inner_bytes.as_slice());
    assert!(array.as_bytes()[inner_bytes.len()..].iter().all(|&b| b == 0));
}

#[test]
fn decode_scalar_into_bytes_slot() {
    let bytes = document(vec![("a", Value::Int32(0x0102))]);
    let array = decode(&bytes, &ElementType::bytes(6)).unwrap();
    assert_eq!(array.as_bytes(), &[2, 1, 0, 0, 0, 0]);
}

// =============================================================================
// Overflow policy
// =============================================================================

#[test]
fn truncation_by_default() {
    let bytes = document(vec![("a", Value::from("overflowing"))]);
    let array = decode(&bytes, &ElementType::bytes(4)).unwrap();
    assert_eq!(array.as_bytes(), b"over");
}

#[test]
fn strict_mode_rejects_oversized() {
    let bytes = document(vec![
        ("a", Value::from("ok")),
        ("b", Value::from("overflowing")),
    ]);
    assert_eq!(
        decode_with(&bytes, &ElementType::bytes(4), &DecodeOptions::strict()),
        Err(DecodeError::ValueTooLarge {
            coordinates: vec![1],
            len: 11,
            width: 4,
        })
    );
}

// =============================================================================
// Failure propagation
// =============================================================================

#[test]
fn unsupported_tag_anywhere_fails() {
    for unsupported in [
        Value::Null,
        Value::Undefined,
        Value::MinKey,
        Value::MaxKey,
        Value::Decimal128([0; 16]),
    ] {
        let tag = unsupported.tag();
        let bytes = document(vec![(
            "a",
            Value::Array(vec![Value::Int32(1), unsupported]),
        )]);
        let dt = ElementType::int(4).with_subarray(vec![2]);
        assert_eq!(
            decode(&bytes, &dt),
            Err(DecodeError::UnsupportedType {
                tag,
                coordinates: vec![0, 1],
            })
        );
    }
}

#[test]
fn unsupported_complex_tags() {
    let bytes = document(vec![(
        "p",
        Value::DbPointer {
            namespace: "db.c".into(),
            id: [1; 12],
        },
    )]);
    assert!(matches!(
        decode(&bytes, &ElementType::bytes(16)),
        Err(DecodeError::UnsupportedType {
            tag: ElementTag::DbPointer,
            ..
        })
    ));

    let bytes = document(vec![(
        "c",
        Value::CodeWithScope {
            code: "x".into(),
            scope: vec![],
        },
    )]);
    assert!(matches!(
        decode(&bytes, &ElementType::bytes(16)),
        Err(DecodeError::UnsupportedType {
            tag: ElementTag::CodeWithScope,
            ..
        })
    ));
}

#[test]
fn scalar_load_failures() {
    let bytes = document(vec![("a", Value::Int32(300))]);
    assert_eq!(
        decode(&bytes, &ElementType::uint(1)),
        Err(DecodeError::LoadFailed {
            coordinates: vec![0],
            source: ScalarError::OutOfRange {
                value: "300".into(),
                kind: ScalarKind::UInt,
                width: 1,
            },
        })
    );

    let bytes = document(vec![("a", Value::Double(f64::NAN))]);
    assert!(matches!(
        decode(&bytes, &ElementType::int(4)),
        Err(DecodeError::LoadFailed {
            source: ScalarError::NotFinite { .. },
            ..
        })
    ));

    let bytes = document(vec![("a", Value::ObjectId([7; 12]))]);
    assert!(matches!(
        decode(&bytes, &ElementType::int(8)),
        Err(DecodeError::LoadFailed {
            source: ScalarError::Incompatible {
                tag: ElementTag::ObjectId,
                ..
            },
            ..
        })
    ));

    // The same ObjectId fits a byte slot exactly
    let array = decode(&bytes, &ElementType::bytes(12)).unwrap();
    assert_eq!(array.as_bytes(), &[7; 12]);
}

// =============================================================================
// Shape mismatches
// =============================================================================

#[test]
fn nested_deeper_than_shape() {
    let bytes = document(vec![("a", Value::from(vec![vec![1i32]]))]);
    let dt = ElementType::int(4).with_subarray(vec![1]);
    assert_eq!(
        decode(&bytes, &dt),
        Err(DecodeError::ShapeMismatch {
            coordinates: vec![0, 0],
            reason: ShapeError::TooDeep { rank: 2 },
        })
    );
}

#[test]
fn array_length_disagreement() {
    let dt = ElementType::int(4).with_subarray(vec![3]);

    let long = document(vec![("a", Value::from(vec![1i32, 2, 3, 4]))]);
    assert!(matches!(
        decode(&long, &dt),
        Err(DecodeError::ShapeMismatch {
            reason: ShapeError::Length { expected: 3, .. },
            ..
        })
    ));

    let short = document(vec![("a", Value::from(vec![1i32]))]);
    assert_eq!(
        decode(&short, &dt),
        Err(DecodeError::ShapeMismatch {
            coordinates: vec![0],
            reason: ShapeError::Length {
                expected: 3,
                actual: 1,
            },
        })
    );
}

#[test]
fn scalar_where_subarray_declared() {
    let bytes = document(vec![
        ("a", Value::from(vec![1i32, 2])),
        ("b", Value::Int32(3)),
    ]);
    let dt = ElementType::int(4).with_subarray(vec![2]);
    assert_eq!(
        decode(&bytes, &dt),
        Err(DecodeError::ShapeMismatch {
            coordinates: vec![1],
            reason: ShapeError::MissingDimension { depth: 0, rank: 2 },
        })
    );
}

// =============================================================================
// Invalid input
// =============================================================================

#[test]
fn malformed_documents() {
    assert!(matches!(
        decode(&[], &ElementType::int(4)),
        Err(DecodeError::MalformedDocument(_))
    ));

    let mut bytes = document(vec![("a", Value::Int32(1))]);
    bytes[0] += 1;
    assert!(matches!(
        decode(&bytes, &ElementType::int(4)),
        Err(DecodeError::MalformedDocument(
            DocumentError::LengthMismatch { .. }
        ))
    ));

    // Unknown element tag
    let mut bytes = document(vec![("a", Value::Int32(1))]);
    bytes[4] = 0x42;
    assert!(matches!(
        decode(&bytes, &ElementType::int(4)),
        Err(DecodeError::MalformedDocument(DocumentError::InvalidTag {
            tag: 0x42,
            ..
        }))
    ));
}

#[test]
fn truncated_inputs_never_panic() {
    let bytes = document(vec![
        ("a", Value::from(vec![1i32, 2])),
        ("b", Value::from("text")),
        ("c", Value::Double(1.0)),
    ]);
    for len in 0..bytes.len() {
        assert!(decode(&bytes[..len], &ElementType::bytes(8)).is_err());
    }
}

#[test]
fn invalid_element_types() {
    let bytes = document(vec![("a", Value::Int32(1))]);

    assert!(matches!(
        ">i4".parse::<ElementType>(),
        Err(ElementTypeError::BigEndian)
    ));
    assert!(matches!(
        decode(&bytes, &ElementType::float(2)),
        Err(DecodeError::InvalidElementType(
            ElementTypeError::InvalidWidth { .. }
        ))
    ));
    assert!(matches!(
        decode(&bytes, &ElementType::int(4).with_subarray(vec![])),
        Err(DecodeError::InvalidElementType(
            ElementTypeError::EmptySubarray
        ))
    ));
    assert!(matches!(
        decode(&bytes, &ElementType::int(4).with_subarray(vec![1; 40])),
        Err(DecodeError::InvalidElementType(
            ElementTypeError::RankTooLarge { .. }
        ))
    ));
    assert!(matches!(
        decode(
            &bytes,
            &ElementType::int(8).with_subarray(vec![usize::MAX / 2, 4])
        ),
        Err(DecodeError::InvalidElementType(ElementTypeError::TooLarge))
    ));
}

// =============================================================================
// Document model and encode path
// =============================================================================

#[test]
fn parse_exposes_values() {
    let bytes = document(vec![
        ("name", Value::from("row")),
        ("values", Value::from(vec![1.0f64, 2.0])),
    ]);
    let doc = parse(&bytes).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("name").unwrap().as_str(), Some("row"));
    assert_eq!(doc.get("values").unwrap().as_array().unwrap().len(), 2);
    assert!(doc.get("missing").is_none());
}

#[test]
fn encode_is_not_supported() {
    let bytes = document(vec![("a", Value::Int32(1))]);
    let array = decode(&bytes, &ElementType::int(4)).unwrap();
    assert!(matches!(
        encode(&array),
        Err(EncodeError::Unsupported { .. })
    ));
}
