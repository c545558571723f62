use super::*;
use crate::graph::TypeGraph;
use crate::provider::LiteralValue;

#[test]
fn boolean_wins_over_union() {
    let graph = TypeGraph::new();
    let boolean = graph.boolean();
    assert!(graph.type_flags(boolean).contains(TypeFlags::UNION));
    assert_eq!(classify(&graph, boolean), TypeClass::Boolean);
}

#[test]
fn arrays_by_symbol_and_empty_tuple() {
    let mut graph = TypeGraph::new();
    let number = graph.number();
    let numbers = graph.array(number);
    let empty = graph.tuple(Vec::new());

    assert!(is_array(&graph, numbers));
    assert!(is_array(&graph, empty));
    assert_eq!(classify(&graph, numbers), TypeClass::Array);
    assert_eq!(classify(&graph, empty), TypeClass::Array);
}

#[test]
fn non_empty_tuple_is_type_arguments() {
    let mut graph = TypeGraph::new();
    let a = graph.string_literal("a");
    let b = graph.string_literal("b");
    let tuple = graph.readonly_tuple(vec![a, b]);

    assert!(!is_array(&graph, tuple));
    assert_eq!(classify(&graph, tuple), TypeClass::TypeArguments);
}

#[test]
fn callable_is_function() {
    let mut graph = TypeGraph::new();
    let void = graph.void();
    let signature = graph.signature(Vec::new(), void);
    let callback = graph.function(vec![signature]);
    assert_eq!(classify(&graph, callback), TypeClass::Function);
}

#[test]
fn unions_and_intersections() {
    let mut graph = TypeGraph::new();
    let a = graph.string_literal("a");
    let b = graph.string_literal("b");
    let union = graph.union(vec![a, b]);
    let left = graph.object("Left");
    let right = graph.object("Right");
    let both = graph.intersection(vec![left, right]);

    assert_eq!(classify(&graph, union), TypeClass::UnionOrIntersection);
    assert_eq!(classify(&graph, both), TypeClass::UnionOrIntersection);
}

#[test]
fn boolean_inside_union_does_not_make_it_boolean() {
    let mut graph = TypeGraph::new();
    let boolean = graph.boolean();
    let n = graph.number_literal(123.0);
    let union = graph.union(vec![boolean, n]);
    assert_eq!(classify(&graph, union), TypeClass::UnionOrIntersection);
}

#[test]
fn literals_and_intrinsics() {
    let mut graph = TypeGraph::new();
    let text = graph.string_literal("gif");
    let number = graph.number_literal(1.0);
    let truthy = graph.boolean_literal(true);
    let any = graph.any();
    let string = graph.string();
    let member = graph.enum_member("GIF", LiteralValue::String("gif".to_string()));

    for ty in [text, number, truthy, any, string, member] {
        assert_eq!(classify(&graph, ty), TypeClass::Literal, "{}", graph.type_to_string(ty));
    }
}

#[test]
fn named_object_is_shape() {
    let mut graph = TypeGraph::new();
    let page = graph.object("Page");
    assert_eq!(classify(&graph, page), TypeClass::Shape);
}

#[test]
fn classification_is_idempotent() {
    let fixture = crate::test_fixtures::gallery_fixture();
    let graph = &fixture.graph;
    for index in 0..graph.type_count() {
        let ty = crate::graph::TypeId(index as u32);
        assert_eq!(classify(graph, ty), classify(graph, ty));
    }
}
