//! Serialization tests, compiled only with the `serde` feature.

#![cfg(feature = "serde")]

use algebrars::effect::{Read, Writer};
use algebrars::typeclass::{All, Identity, Max, Sum};
use rstest::rstest;

#[rstest]
fn identity_serializes_transparently() {
    let json = serde_json::to_string(&Identity::new(vec![1, 2])).unwrap();
    assert_eq!(json, "[1,2]");

    let restored: Identity<Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Identity::new(vec![1, 2]));
}

#[rstest]
#[case(Sum::new(3), "3")]
#[case(Sum::new(-12), "-12")]
fn sum_serializes_as_inner_value(#[case] sum: Sum<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&sum).unwrap(), expected);
}

#[rstest]
fn wrappers_deserialize_from_inner_value() {
    let maximum: Max<u8> = serde_json::from_str("200").unwrap();
    let all: All = serde_json::from_str("false").unwrap();
    assert_eq!(maximum, Max::new(200));
    assert_eq!(all, All::new(false));
}

#[rstest]
fn writer_snapshot_serializes_raw_log() {
    let writer: Writer<Sum<i32>, &str> = Writer::new(2, "a").chain(|_| Writer::new(5, "b"));
    let json = serde_json::to_value(writer.read()).unwrap();
    assert_eq!(json, serde_json::json!({ "log": 7, "value": "b" }));
}

#[rstest]
fn writer_snapshot_deserializes() {
    let read: Read<String, u32> = serde_json::from_str(r#"{"log":"ab","value":2}"#).unwrap();
    assert_eq!(
        read,
        Read {
            log: "ab".to_string(),
            value: 2
        }
    );
}
