//! Byte-exact wire format coverage across all nineteen tags.

use json_binary::{
    decode, encode, DocValue, JsonBinaryDecoder, JsonBinaryEncoder, JsonBinaryError, WireTag,
};

fn encode_dynamic(value: &DocValue) -> Vec<u8> {
    let mut encoder = JsonBinaryEncoder::new();
    encoder.encode(value).expect("encode")
}

fn decode_dynamic(bytes: &[u8]) -> Result<DocValue, JsonBinaryError> {
    JsonBinaryDecoder::new().decode(bytes)
}

#[test]
fn tag_codes_are_wire_contract() {
    let expected: &[(WireTag, u8)] = &[
        (WireTag::Object8, 1),
        (WireTag::Object64, 2),
        (WireTag::Array8, 3),
        (WireTag::Array64, 4),
        (WireTag::String8, 5),
        (WireTag::String64, 6),
        (WireTag::Null, 7),
        (WireTag::BoolTrue, 8),
        (WireTag::BoolFalse, 9),
        (WireTag::Float32, 10),
        (WireTag::Float64, 11),
        (WireTag::Int8, 12),
        (WireTag::Int16, 13),
        (WireTag::Int32, 14),
        (WireTag::Int64, 15),
        (WireTag::Uint8, 16),
        (WireTag::Uint16, 17),
        (WireTag::Uint32, 18),
        (WireTag::Uint64, 19),
    ];
    for (tag, code) in expected {
        assert_eq!(*tag as u8, *code);
        assert_eq!(WireTag::from_u8(*code), Some(*tag));
    }
    for byte in [0u8, 20, 21, 127, 128, 254, 255] {
        assert_eq!(WireTag::from_u8(byte), None);
    }
}

#[test]
fn every_numeric_tag_decodes_dynamically() {
    let cases: Vec<(Vec<u8>, DocValue)> = vec![
        (vec![12, 0x80], DocValue::Integer(-128)),
        ({
            let mut b = vec![13];
            b.extend_from_slice(&(-30_000i16).to_le_bytes());
            b
        }, DocValue::Integer(-30_000)),
        ({
            let mut b = vec![14];
            b.extend_from_slice(&(-2_000_000_000i32).to_le_bytes());
            b
        }, DocValue::Integer(-2_000_000_000)),
        ({
            let mut b = vec![15];
            b.extend_from_slice(&i64::MIN.to_le_bytes());
            b
        }, DocValue::Integer(i64::MIN)),
        (vec![16, 255], DocValue::UInteger(255)),
        ({
            let mut b = vec![17];
            b.extend_from_slice(&60_000u16.to_le_bytes());
            b
        }, DocValue::UInteger(60_000)),
        ({
            let mut b = vec![18];
            b.extend_from_slice(&4_000_000_000u32.to_le_bytes());
            b
        }, DocValue::UInteger(4_000_000_000)),
        ({
            let mut b = vec![19];
            b.extend_from_slice(&u64::MAX.to_le_bytes());
            b
        }, DocValue::UInteger(u64::MAX)),
        ({
            let mut b = vec![10];
            b.extend_from_slice(&(-0.5f32).to_le_bytes());
            b
        }, DocValue::Float(-0.5)),
        ({
            let mut b = vec![11];
            b.extend_from_slice(&6.25f64.to_le_bytes());
            b
        }, DocValue::Float(6.25)),
    ];
    for (bytes, expected) in cases {
        assert_eq!(decode_dynamic(&bytes), Ok(expected));
    }
}

#[test]
fn minimal_width_selection_matrix() {
    // Width by magnitude, sign class by value.
    let cases: &[(i64, u8)] = &[
        (0, 16),
        (200, 16),
        (255, 16),
        (256, 17),
        (300, 17),
        (65_535, 17),
        (65_536, 18),
        (4_294_967_295, 18),
        (4_294_967_296, 19),
        (1 << 40, 19),
        (-1, 12),
        (-128, 12),
        (-129, 13),
        (-200, 13),
        (-32_768, 13),
        (-32_769, 14),
        (-2_147_483_648, 14),
        (-2_147_483_649, 15),
    ];
    for (value, tag) in cases {
        let bytes = encode_dynamic(&DocValue::Integer(*value));
        assert_eq!(bytes[0], *tag, "wrong tag for {value}");
    }
}

#[test]
fn exact_width_selection_matrix() {
    assert_eq!(encode(&5u8).unwrap()[0], 16);
    assert_eq!(encode(&5u16).unwrap()[0], 17);
    assert_eq!(encode(&5u32).unwrap()[0], 18);
    assert_eq!(encode(&5u64).unwrap()[0], 19);
    assert_eq!(encode(&5i8).unwrap()[0], 12);
    assert_eq!(encode(&5i16).unwrap()[0], 13);
    assert_eq!(encode(&5i32).unwrap()[0], 14);
    assert_eq!(encode(&5i64).unwrap()[0], 15);
    assert_eq!(encode(&5.0f32).unwrap()[0], 10);
    assert_eq!(encode(&5.0f64).unwrap()[0], 11);
}

#[test]
fn container_count_field_widths() {
    let arr_255 = DocValue::Array(vec![DocValue::Null; 255]);
    assert_eq!(encode_dynamic(&arr_255)[0], 3);

    let arr_256 = DocValue::Array(vec![DocValue::Null; 256]);
    let bytes = encode_dynamic(&arr_256);
    assert_eq!(bytes[0], 4);
    // ARRAY_64 carries a full 8-byte little-endian count.
    assert_eq!(u64::from_le_bytes(bytes[1..9].try_into().unwrap()), 256);
    assert_eq!(bytes.len(), 9 + 256);

    let obj_256 = DocValue::Object(
        (0..256)
            .map(|i| (format!("k{i}"), DocValue::Null))
            .collect(),
    );
    assert_eq!(encode_dynamic(&obj_256)[0], 2);
}

#[test]
fn object64_and_array64_decode() {
    let arr = DocValue::Array(vec![DocValue::UInteger(9); 300]);
    assert_eq!(decode_dynamic(&encode_dynamic(&arr)), Ok(arr));

    let obj = DocValue::Object(
        (0..300)
            .map(|i| (format!("k{i}"), DocValue::UInteger(i)))
            .collect(),
    );
    assert_eq!(decode_dynamic(&encode_dynamic(&obj)), Ok(obj));
}

#[test]
fn truncation_error_matrix() {
    let cases: &[&[u8]] = &[
        &[],
        &[5, 10],
        &[6, 10, 0, 0, 0, 0, 0, 0, 0],
        &[13, 0x01],
        &[11, 0, 0, 0],
        &[3, 2, 7],
        &[1, 1, 5, 3, b'a'],
        &[19, 1, 2, 3, 4, 5, 6, 7],
    ];
    for bytes in cases {
        assert_eq!(
            decode_dynamic(bytes),
            Err(JsonBinaryError::TruncatedInput),
            "expected truncation for {bytes:?}"
        );
    }
}

#[test]
fn unknown_tag_error_matrix() {
    assert_eq!(decode_dynamic(&[255]), Err(JsonBinaryError::UnknownTag(255)));
    // Unknown tag nested inside a valid container.
    assert_eq!(
        decode_dynamic(&[3, 1, 42]),
        Err(JsonBinaryError::UnknownTag(42))
    );
}

#[test]
fn key_typing_error_matrix() {
    // INT_8 key.
    assert_eq!(
        decode_dynamic(&[1, 1, 12, 0, 7]),
        Err(JsonBinaryError::KeyMustBeString)
    );
    // Nested array key.
    assert_eq!(
        decode_dynamic(&[1, 1, 3, 0, 7]),
        Err(JsonBinaryError::KeyMustBeString)
    );
    // OBJECT_64 enforces the same rule.
    let mut bytes = vec![2];
    bytes.extend_from_slice(&1u64.to_le_bytes());
    bytes.extend_from_slice(&[8, 7]);
    assert_eq!(
        decode_dynamic(&bytes),
        Err(JsonBinaryError::KeyMustBeString)
    );
}

#[test]
fn depth_guard_boundary() {
    fn nested(levels: usize) -> DocValue {
        let mut v = DocValue::Null;
        for _ in 0..levels {
            v = DocValue::Array(vec![v]);
        }
        v
    }

    let mut encoder = JsonBinaryEncoder::new();
    let bytes = encoder.encode(&nested(32)).unwrap();
    assert_eq!(decode_dynamic(&bytes), Ok(nested(32)));
    assert_eq!(
        encoder.encode(&nested(33)),
        Err(JsonBinaryError::DepthExceeded)
    );

    // Mixed object/array nesting counts the same way.
    let mut v = DocValue::Null;
    for i in 0..33 {
        v = if i % 2 == 0 {
            DocValue::Array(vec![v])
        } else {
            DocValue::Object(vec![("k".into(), v)])
        };
    }
    assert_eq!(encoder.encode(&v), Err(JsonBinaryError::DepthExceeded));
}

#[test]
fn typed_and_dynamic_bytes_interoperate() {
    // Exact-width bytes decode dynamically with widening.
    let bytes = encode(&-200i16).unwrap();
    assert_eq!(decode_dynamic(&bytes), Ok(DocValue::Integer(-200)));

    // Dynamic bytes decode statically when the widths line up.
    let bytes = encode_dynamic(&DocValue::Integer(200));
    assert_eq!(decode::<u8>(&bytes), Ok(200));
}
