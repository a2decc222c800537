//! Integration tests for Value copy, move and assignment
//!
//! Tests deep-copy independence and re-tagging on assignment.

use jksn::{Kind, Value};

#[test]
fn assign_array_then_mutate_source() {
    let mut b: Value = vec![1, 2].into();
    let mut a = Value::Null;
    a.assign(&b);
    b.as_array_mut().unwrap()[0] = Value::from("changed");
    b.push(3).unwrap();
    assert_eq!(a, Value::from(vec![1, 2]));
}

#[test]
fn assign_object_then_mutate_source() {
    let mut b = Value::object();
    b.insert("k", vec![1]).unwrap();
    let mut a = Value::Int(0);
    a.assign(&b);
    b.as_object_mut()
        .unwrap()
        .get_mut(&Value::from("k"))
        .unwrap()
        .push(2)
        .unwrap();
    assert_eq!(a.get(&Value::from("k")), Some(&Value::from(vec![1])));
}

#[test]
fn assign_retags() {
    let mut v = Value::from("text");
    v.assign(&Value::Double(1.5));
    assert_eq!(v.kind(), Kind::Double);
    v.assign(&Value::object());
    assert_eq!(v.kind(), Kind::Object);
    v.assign(&Value::Undefined);
    assert!(v.is_undefined());
}

#[test]
fn self_assignment_via_clone_is_noop() {
    let mut a: Value = vec![Value::from("x"), Value::Null].into();
    let before = a.clone();
    let same = a.clone();
    a.assign(&same);
    assert_eq!(a, before);
}

#[test]
fn take_leaves_undefined() {
    let mut a = Value::from(vec![1, 2, 3]);
    let moved = a.take();
    assert!(a.is_undefined());
    assert_eq!(moved.len(), Some(3));
}

#[test]
fn copy_round_trip_for_every_kind() {
    let values = vec![
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Int(-1),
        Value::Float(f32::NAN),
        Value::Double(-0.0),
        Value::LongDouble(f64::INFINITY),
        Value::from("s"),
        Value::blob(vec![0, 255]),
        Value::from(vec![Value::Null, Value::from(vec![1])]),
        [(Value::from(vec![1]), Value::object())].into_iter().collect(),
    ];
    for v in values {
        let mut w = Value::Undefined;
        w.assign(&v);
        assert_eq!(w, v, "{v:?}");
        assert!(!(w < v) && !(v < w));
    }
}
