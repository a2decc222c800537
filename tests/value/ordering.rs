//! Integration tests for Value equality and ordering
//!
//! Tests numeric promotion, container ordering and the kind fallback table.

use std::collections::{BTreeMap, HashSet};

use jksn::{Kind, Value};
use proptest::prelude::*;

// =============================================================================
// Numeric promotion
// =============================================================================

#[test]
fn int_and_double_three() {
    let i = Value::Int(3);
    let d = Value::Double(3.0);
    assert_eq!(i, d);
    assert!(!(i < d));
    assert!(!(d < i));
}

#[test]
fn every_numeric_pair_is_comparable() {
    let nums = [
        Value::Int(2),
        Value::Float(2.0),
        Value::Double(2.0),
        Value::LongDouble(2.0),
    ];
    for a in &nums {
        for b in &nums {
            assert_eq!(a, b, "{a:?} vs {b:?}");
        }
    }
    assert!(Value::Float(1.5) < Value::Int(2));
    assert!(Value::Int(2) < Value::LongDouble(2.25));
}

#[test]
fn numeric_keys_collapse_in_objects() {
    let mut o = BTreeMap::new();
    o.insert(Value::Int(1), "int");
    o.insert(Value::Double(1.0), "double");
    o.insert(Value::Float(1.0), "float");
    assert_eq!(o.len(), 1);
    assert_eq!(o.get(&Value::LongDouble(1.0)), Some(&"float"));
}

#[test]
fn equal_numbers_share_hash_slot() {
    let set: HashSet<Value> = [Value::Int(7), Value::Double(7.0), Value::Float(7.0)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn array_prefix_is_less() {
    let short: Value = vec![1, 2].into();
    let long: Value = vec![1, 2, 3].into();
    assert!(short < long);
    assert_ne!(short, long);
}

#[test]
fn array_first_difference_decides() {
    let a: Value = vec![1, 3].into();
    let b: Value = vec![2, 1].into();
    assert!(a < b);
}

#[test]
fn array_equality_is_structural() {
    let a = Value::Array(vec![Value::Int(1), Value::from(vec![Value::from("x")])]);
    let b = Value::Array(vec![Value::Double(1.0), Value::from(vec![Value::from("x")])]);
    assert_eq!(a, b);
}

#[test]
fn object_order_ignores_insertion_order() {
    let mut first = Value::object();
    first.insert(2, "b").unwrap();
    first.insert(1, "a").unwrap();

    let mut second = Value::object();
    second.insert(1, "a").unwrap();
    second.insert(2, "b").unwrap();

    assert_eq!(first, second);
    let keys: Vec<i64> = first
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.to_int().unwrap())
        .collect();
    assert_eq!(keys, vec![1, 2]);
}

#[test]
fn object_ordering_by_pairs() {
    let mut a = Value::object();
    a.insert(1, "a").unwrap();
    let mut b = Value::object();
    b.insert(1, "b").unwrap();
    let mut c = Value::object();
    c.insert(1, "a").unwrap();
    c.insert(2, "a").unwrap();

    assert!(a < b);
    assert!(a < c);
    assert!(c < b);
}

// =============================================================================
// Kind fallback
// =============================================================================

#[test]
fn fallback_rank_table() {
    let ladder = [
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::Int(i64::MAX),
        Value::from(""),
        Value::blob(Vec::new()),
        Value::array(),
        Value::object(),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
    }
}

#[test]
fn mixed_kind_keys() {
    let mut o = Value::object();
    o.insert("s", 1).unwrap();
    o.insert(Value::Null, 2).unwrap();
    o.insert(vec![1], 3).unwrap();
    o.insert(true, 4).unwrap();
    let kinds: Vec<Kind> = o.as_object().unwrap().keys().map(Value::kind).collect();
    assert_eq!(kinds, vec![Kind::Null, Kind::Bool, Kind::String, Kind::Array]);
}

// =============================================================================
// Properties
// =============================================================================

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::Int),
        (-3i32..3).prop_map(|n| Value::Float(n as f32 / 2.0)),
        (-3i32..3).prop_map(|n| Value::Double(f64::from(n) / 2.0)),
        (-3i32..3).prop_map(|n| Value::LongDouble(f64::from(n))),
        Just(Value::Double(f64::NAN)),
        "[ab]{0,2}".prop_map(Value::String),
        prop::collection::vec(0u8..2, 0..2).prop_map(Value::Blob),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map(inner.clone(), inner, 0..3).prop_map(Value::Object),
        ]
    })
}

proptest! {
    #[test]
    fn exactly_one_relation_holds(a in tree(), b in tree()) {
        let count = [a < b, a == b, b < a].iter().filter(|x| **x).count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn transitive(a in tree(), b in tree(), c in tree()) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
        }
    }

    #[test]
    fn reflexive_against_structural_copy(a in tree()) {
        let copy = a.clone();
        prop_assert_eq!(&a, &copy);
        prop_assert!(!(a < copy) && !(copy < a));
    }
}
