//! Dispatch-order and fault-propagation tests for the shape adapters

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use jot_adapt::{write_array, write_object, write_pair, write_value, JsonWriter};
use jot_test_utils::{Op, RecordingWriter, TextWriter, WriterFault};

fn val(s: &str) -> Op {
    Op::Value(s.to_string())
}

#[test]
fn sequence_drives_open_elements_close() {
    let mut w = RecordingWriter::new();
    write_value(&mut w, &vec![1i32, 2, 3]).unwrap();
    assert_eq!(
        w.into_ops(),
        vec![Op::BeginArray, val("1"), val("2"), val("3"), Op::EndArray]
    );
}

#[test]
fn empty_sequence_is_open_then_close() {
    let mut w = RecordingWriter::new();
    write_value(&mut w, &Vec::<i32>::new()).unwrap();
    assert_eq!(w.into_ops(), vec![Op::BeginArray, Op::EndArray]);
}

#[test]
fn empty_set_is_open_then_close() {
    let mut w = RecordingWriter::new();
    write_value(&mut w, &BTreeSet::<i32>::new()).unwrap();
    assert_eq!(w.into_ops(), vec![Op::BeginArray, Op::EndArray]);
}

#[test]
fn empty_mapping_is_open_then_close() {
    let mut w = RecordingWriter::new();
    write_value(&mut w, &BTreeMap::<String, i32>::new()).unwrap();
    assert_eq!(w.into_ops(), vec![Op::BeginObject, Op::EndObject]);
}

#[test]
fn deque_uses_the_sequence_rule() {
    let deque: VecDeque<i32> = [4, 5].into_iter().collect();
    let mut w = RecordingWriter::new();
    write_value(&mut w, &deque).unwrap();
    assert_eq!(
        w.into_ops(),
        vec![Op::BeginArray, val("4"), val("5"), Op::EndArray]
    );
}

#[test]
fn set_elements_come_out_ascending() {
    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    let mut w = RecordingWriter::new();
    write_value(&mut w, &set).unwrap();
    assert_eq!(
        w.into_ops(),
        vec![Op::BeginArray, val("1"), val("2"), val("3"), Op::EndArray]
    );
}

#[test]
fn pair_drives_exactly_one_operation() {
    let mut w = RecordingWriter::new();
    write_value(&mut w, &("x", 5i32)).unwrap();
    assert_eq!(w.into_ops(), vec![Op::Pair("x".into(), "5".into())]);
}

#[test]
fn write_pair_helper_matches_the_pair_rule() {
    let mut w = RecordingWriter::new();
    write_pair(&mut w, &"x", &5i32).unwrap();
    assert_eq!(w.into_ops(), vec![Op::Pair("x".into(), "5".into())]);
}

#[test]
fn mapping_ignores_insertion_order() {
    let mut map = BTreeMap::new();
    map.insert("b", 2i32);
    map.insert("a", 1i32);
    let mut w = RecordingWriter::new();
    write_value(&mut w, &map).unwrap();
    assert_eq!(
        w.into_ops(),
        vec![
            Op::BeginObject,
            Op::Pair("a".into(), "1".into()),
            Op::Pair("b".into(), "2".into()),
            Op::EndObject,
        ]
    );
}

#[test]
fn adapters_chain_through_the_returned_writer() {
    let mut w = RecordingWriter::new();
    let w2 = write_array(&mut w, &[1i32]).unwrap();
    write_array(w2, &[2i32]).unwrap();
    assert_eq!(
        w.into_ops(),
        vec![
            Op::BeginArray,
            val("1"),
            Op::EndArray,
            Op::BeginArray,
            val("2"),
            Op::EndArray,
        ]
    );
}

#[test]
fn nested_containers_recurse_by_shape() {
    let mut map: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    map.insert("a".to_string(), vec![1, 2]);
    map.insert("b".to_string(), vec![]);
    let mut w = TextWriter::new();
    write_value(&mut w, &map).unwrap();
    assert_eq!(w.into_string(), "{\"a\":[1,2],\"b\":[]}");
}

#[test]
fn sequence_of_mappings_renders_nested_objects() {
    let mut inner = BTreeMap::new();
    inner.insert("k", 1i32);
    let outer = vec![inner.clone(), BTreeMap::new(), inner];
    let mut w = TextWriter::new();
    write_value(&mut w, &outer).unwrap();
    assert_eq!(w.into_string(), "[{\"k\":1},{},{\"k\":1}]");
}

#[test]
fn empty_containers_render_as_bare_delimiters() {
    let mut w = TextWriter::new();
    write_value(&mut w, &Vec::<i32>::new()).unwrap();
    assert_eq!(w.into_string(), "[]");

    let mut w = TextWriter::new();
    write_value(&mut w, &BTreeMap::<String, i32>::new()).unwrap();
    assert_eq!(w.into_string(), "{}");
}

#[test]
fn slice_uses_the_sequence_rule() {
    let items = [10i32, 20];
    let mut w = TextWriter::new();
    write_value(&mut w, &items[..]).unwrap();
    assert_eq!(w.into_string(), "[10,20]");
}

#[test]
fn element_fault_still_closes_the_array() {
    // Operation 2 is the second element write.
    let mut w = RecordingWriter::failing_at(2);
    let err = write_array(&mut w, &[1i32, 2, 3]).unwrap_err();
    assert_eq!(err, WriterFault(2));
    // The third element is never attempted; the close still fires.
    assert_eq!(
        w.into_ops(),
        vec![Op::BeginArray, val("1"), Op::EndArray]
    );
}

#[test]
fn entry_fault_still_closes_the_object() {
    let mut map = BTreeMap::new();
    map.insert("a", 1i32);
    map.insert("b", 2i32);
    // Operation 1 is the first pair write.
    let mut w = RecordingWriter::failing_at(1);
    let err = write_object(&mut w, &map).unwrap_err();
    assert_eq!(err, WriterFault(1));
    assert_eq!(w.into_ops(), vec![Op::BeginObject, Op::EndObject]);
}

#[test]
fn open_fault_triggers_no_close() {
    let mut w = RecordingWriter::failing_at(0);
    let err = write_array(&mut w, &[1i32]).unwrap_err();
    assert_eq!(err, WriterFault(0));
    assert_eq!(w.into_ops(), vec![]);
}

#[test]
fn nested_fault_propagates_through_outer_scopes() {
    // BeginArray(0), BeginArray(1), Value(2) faults; both closes still fire.
    let nested = vec![vec![7i32]];
    let mut w = RecordingWriter::failing_at(2);
    let err = write_array(&mut w, &nested).unwrap_err();
    assert_eq!(err, WriterFault(2));
    assert_eq!(
        w.into_ops(),
        vec![Op::BeginArray, Op::BeginArray, Op::EndArray, Op::EndArray]
    );
}

#[test]
fn generic_dispatch_recurses_through_value() {
    // A pair whose value is a sequence exercises capture of a nested shape.
    let mut w = RecordingWriter::new();
    w.value(&("xs", vec![1i32])).unwrap();
    assert_eq!(w.into_ops(), vec![Op::Pair("xs".into(), "[1]".into())]);
}
