use super::*;
use crate::graph::{DeclParent, TypeGraph};
use crate::test_fixtures::{button_fixture, gallery_fixture};

fn class_names(doc: &Documentation) -> Vec<&str> {
    doc.classes.iter().map(|class| class.name.as_str()).collect()
}

#[test]
fn documents_every_unit() {
    let fixture = gallery_fixture();
    let doc = generate_documentation(&fixture.graph, DocGenOptions::default());

    assert!(doc.is_complete());
    assert_eq!(class_names(&doc), ["Component"]);
    assert_eq!(doc.classes[0].file_name, "nested-types/index.ts");
}

#[test]
fn top_level_classes_count_as_exported() {
    let (graph, _) = button_fixture();
    let doc = generate_documentation(&graph, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Button"]);
}

#[test]
fn namespaces_are_searched_for_exported_classes() {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("widgets.ts", false);
    let outer = graph.declare_namespace(DeclParent::Unit(unit), "Widgets", false);
    graph.declare_class(DeclParent::Namespace(outer), "Visible", true);
    graph.declare_class(DeclParent::Namespace(outer), "Hidden", false);
    let nested = graph.declare_namespace(DeclParent::Namespace(outer), "Nested", true);
    graph.declare_class(DeclParent::Namespace(nested), "Deep", true);
    let private = graph.declare_namespace(DeclParent::Namespace(outer), "Private", false);
    graph.declare_class(DeclParent::Namespace(private), "Unreachable", true);

    let doc = generate_documentation(&graph, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Visible", "Deep"]);
}

#[test]
fn other_declarations_and_anonymous_classes_are_ignored() {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("a.ts", false);
    graph.declare_other(DeclParent::Unit(unit), "helper", true);
    graph.declare_anonymous_class(DeclParent::Unit(unit), true);
    graph.declare_class(DeclParent::Unit(unit), "Named", true);

    let doc = generate_documentation(&graph, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Named"]);
    assert!(doc.is_complete());
}

#[test]
fn declaration_files_are_skipped() {
    let mut graph = TypeGraph::new();
    let lib = graph.add_source_unit("lib.d.ts", true);
    graph.declare_class(DeclParent::Unit(lib), "Ambient", true);
    let unit = graph.add_source_unit("app.ts", false);
    graph.declare_class(DeclParent::Unit(unit), "App", true);

    let doc = generate_documentation(&graph, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["App"]);

    let only_lib = generate_documentation_from_units(&graph, &[lib], DocGenOptions::default());
    assert!(only_lib.classes.is_empty());
}

#[test]
fn units_are_documented_in_the_given_order() {
    let mut graph = TypeGraph::new();
    let first = graph.add_source_unit("first.ts", false);
    graph.declare_class(DeclParent::Unit(first), "First", true);
    let second = graph.add_source_unit("second.ts", false);
    graph.declare_class(DeclParent::Unit(second), "Second", true);

    let doc = generate_documentation_from_units(&graph, &[second, first], DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Second", "First"]);
    assert_eq!(doc.classes[0].file_name, "second.ts");
}

#[test]
fn single_node_entry_point() {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("a.ts", false);
    let namespace = graph.declare_namespace(DeclParent::Unit(unit), "Ns", true);
    graph.declare_class(DeclParent::Namespace(namespace), "Inside", true);
    graph.declare_class(DeclParent::Unit(unit), "Outside", true);

    let doc = generate_documentation_from_node(&graph, unit, namespace, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Inside"]);
    assert_eq!(doc.classes[0].file_name, "a.ts");
}

#[test]
fn malformed_class_is_reported_and_walk_continues() {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("a.ts", false);

    let broken_type = graph.object("Broken");
    graph.type_data_mut(broken_type).properties = None;
    let broken = graph.declare_class(DeclParent::Unit(unit), "Fragile", true);
    let parameter = graph.parameter("config", broken_type);
    graph.add_constructor(&broken, vec![parameter]);

    graph.declare_class(DeclParent::Unit(unit), "Sturdy", true);

    let doc = generate_documentation(&graph, DocGenOptions::default());
    assert_eq!(class_names(&doc), ["Sturdy"]);
    assert!(!doc.is_complete());
    assert_eq!(doc.failures.len(), 1);

    let failure = &doc.failures[0];
    assert_eq!(failure.class_name, "Fragile");
    assert_eq!(failure.file_name, "a.ts");
    assert_eq!(
        failure.error,
        DocGenError::MalformedType {
            type_name: "Broken".to_string()
        }
    );
    assert_eq!(
        failure.to_string(),
        "a.ts: class Fragile: Expected type to have some properties: Broken"
    );
}

#[test]
fn options_are_applied_per_class() {
    let fixture = gallery_fixture();
    let doc = generate_documentation(&fixture.graph, DocGenOptions::default().with_max_props(0));
    let props = &doc.classes[0].constructors[0].parameters[0];
    assert!(props.children().is_empty());
}

#[test]
fn oversized_depth_is_clamped() {
    let fixture = gallery_fixture();
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    let clamped = tracing::subscriber::with_default(subscriber, || {
        generate_documentation(&fixture.graph, DocGenOptions::new(1_000_000, 30))
    });
    let ceiling = generate_documentation(
        &fixture.graph,
        DocGenOptions::new(crate::limits::MAX_DEPTH_CEILING, 30),
    );
    assert_eq!(clamped, ceiling);
}

#[test]
fn documentation_serializes_as_class_list() {
    let (graph, _) = button_fixture();
    let doc = generate_documentation(&graph, DocGenOptions::default());
    let value = serde_json::to_value(&doc).unwrap();

    let classes = value.as_array().expect("top level is an array");
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["name"], "Button");
    assert_eq!(classes[0]["fileName"], "react/index.tsx");
}

#[test]
fn extend_keeps_order() {
    let fixture = gallery_fixture();
    let (graph, _) = button_fixture();
    let mut doc = generate_documentation(&fixture.graph, DocGenOptions::default());
    doc.extend(generate_documentation(&graph, DocGenOptions::default()));
    assert_eq!(class_names(&doc), ["Component", "Button"]);
}
