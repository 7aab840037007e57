use confdiff::Node;
use std::collections::BTreeMap;

#[test]
fn test_type_name() {
    assert_eq!(Node::Null.type_name(), "null");
    assert_eq!(Node::Bool(true).type_name(), "boolean");
    assert_eq!(Node::Int(42).type_name(), "integer");
    assert_eq!(Node::Float(2.5).type_name(), "float");
    assert_eq!(Node::String("test".to_string()).type_name(), "string");
    assert_eq!(Node::Mapping(BTreeMap::new()).type_name(), "mapping");
    assert_eq!(Node::Sequence(vec![]).type_name(), "sequence");
}

#[test]
fn test_scalar_equality_is_exact() {
    assert_eq!(Node::Null, Node::Null);
    assert_eq!(Node::Bool(true), Node::Bool(true));
    assert_ne!(Node::Bool(true), Node::Bool(false));
    assert_eq!(Node::Int(42), Node::Int(42));
    assert_ne!(Node::Int(42), Node::Int(43));
    assert_eq!(Node::Float(2.5), Node::Float(2.5));
    assert_ne!(Node::Float(1.0), Node::Float(1.0 + 1e-12));
    assert_eq!(Node::String("a".to_string()), Node::String("a".to_string()));
}

#[test]
fn test_no_coercion_across_scalar_kinds() {
    assert_ne!(Node::Int(1), Node::Float(1.0));
    assert_ne!(Node::Int(1), Node::String("1".to_string()));
    assert_ne!(Node::Bool(false), Node::Int(0));
    assert_ne!(Node::Null, Node::Bool(false));
    assert_ne!(Node::Null, Node::String("null".to_string()));
}

#[test]
fn test_nan_equals_itself() {
    assert_eq!(Node::Float(f64::NAN), Node::Float(f64::NAN));
    let seq = Node::Sequence(vec![Node::Float(f64::NAN)]);
    assert_eq!(seq, seq.clone());
}

#[test]
fn test_mapping_equality_ignores_construction_order() {
    let mut first = BTreeMap::new();
    first.insert("a".to_string(), Node::Int(1));
    first.insert("b".to_string(), Node::Int(2));

    let mut second = BTreeMap::new();
    second.insert("b".to_string(), Node::Int(2));
    second.insert("a".to_string(), Node::Int(1));

    assert_eq!(Node::Mapping(first), Node::Mapping(second));
}

#[test]
fn test_sequence_order_matters() {
    let ab = Node::Sequence(vec![Node::Int(1), Node::Int(2)]);
    let ba = Node::Sequence(vec![Node::Int(2), Node::Int(1)]);
    assert_ne!(ab, ba);
}

#[test]
fn test_render_scalars() {
    assert_eq!(Node::Null.render(), "null");
    assert_eq!(Node::Bool(true).render(), "true");
    assert_eq!(Node::Bool(false).render(), "false");
    assert_eq!(Node::Int(42).render(), "42");
    assert_eq!(Node::Int(-7).render(), "-7");
    assert_eq!(Node::Float(2.5).render(), "2.5");
    assert_eq!(Node::String("on".to_string()).render(), "\"on\"");
}

#[test]
fn test_whole_floats_render_with_a_decimal() {
    assert_eq!(Node::Float(1.0).render(), "1.0");
    assert_eq!(Node::Float(-3.0).render(), "-3.0");
    assert_eq!(Node::Float(0.0).render(), "0.0");
}

#[test]
fn test_render_containers_as_counts() {
    assert_eq!(Node::Sequence(vec![]).render(), "[]");
    assert_eq!(Node::Sequence(vec![Node::Null]).render(), "[ 1 item ]");
    assert_eq!(
        Node::Sequence(vec![Node::Null, Node::Null]).render(),
        "[ 2 items ]"
    );

    assert_eq!(Node::Mapping(BTreeMap::new()).render(), "{}");
    let mut one = BTreeMap::new();
    one.insert("k".to_string(), Node::Null);
    assert_eq!(Node::Mapping(one.clone()).render(), "{ 1 key }");
    one.insert("j".to_string(), Node::Null);
    assert_eq!(Node::Mapping(one).render(), "{ 2 keys }");
}
