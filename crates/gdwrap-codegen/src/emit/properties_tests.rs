//! Property emitter tests.

use gdwrap_api::{ClassInfo, MethodInfo, ParamInfo};

use crate::test_utils::{emit_one, engine_classes, method, param};

fn entity_with_properties(properties: Vec<ParamInfo>) -> Vec<ClassInfo> {
    entity_with(properties, vec![])
}

fn entity_with(properties: Vec<ParamInfo>, methods: Vec<MethodInfo>) -> Vec<ClassInfo> {
    let mut classes = engine_classes();
    classes.push(ClassInfo {
        name: "NodeEntity".to_string(),
        inherits: "RefCounted".to_string(),
        methods,
        properties,
        ..Default::default()
    });
    classes
}

#[test]
fn property_emits_get_set_pair() {
    let classes = entity_with_properties(vec![param("node", "Node")]);
    let (source, diagnostics) = emit_one(&classes, "NodeEntity");

    assert!(source.contains(
        "    public Node Node\n    {\n        get => (Node)Get(_cached_node);\n        set => Set(_cached_node, Variant.From(value));\n    }"
    ));
    assert!(source.contains("    private static readonly StringName _cached_node = \"node\";"));
    assert!(diagnostics.is_empty());
}

#[test]
fn scalar_property_maps_host_type() {
    let classes = entity_with_properties(vec![param("max_count", "int")]);
    let (source, _) = emit_one(&classes, "NodeEntity");

    assert!(source.contains("    public long MaxCount"));
    assert!(source.contains("        get => (long)Get(_cached_max_count);"));
}

#[test]
fn property_claims_name_before_methods() {
    let classes = entity_with(
        vec![param("node", "Node")],
        vec![method("node", vec![], ParamInfo::default())],
    );
    let (source, _) = emit_one(&classes, "NodeEntity");

    // Properties run first in the pipeline, so the property keeps the
    // bare name and the method is suffixed.
    assert!(source.contains("    public Node Node\n"));
    assert!(source.contains("    public void NodeMethod() => Call(_cached_node);"));
}

#[test]
fn unnamed_property_skipped_with_diagnostic() {
    let classes = entity_with_properties(vec![ParamInfo::default(), param("node", "Node")]);
    let (source, diagnostics) = emit_one(&classes, "NodeEntity");

    assert!(source.contains("    public Node Node"));
    assert_eq!(diagnostics.error_count(), 1);
    assert!(diagnostics.render().contains("<property>"));
}

#[test]
fn region_markers_only_when_properties_exist() {
    let classes = entity_with_properties(vec![]);
    let (source, _) = emit_one(&classes, "NodeEntity");
    assert!(!source.contains("#region Properties"));

    let classes = entity_with_properties(vec![param("node", "Node")]);
    let (source, _) = emit_one(&classes, "NodeEntity");
    assert!(source.contains("    #region Properties"));
}
