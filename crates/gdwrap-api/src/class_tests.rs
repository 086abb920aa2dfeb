use crate::{MethodFlags, PropertyUsage, inheritance_map, parse_api_dump};

const SAMPLE_DUMP: &str = r#"[
    {
        "name": "RefCounted",
        "inherits": "Object"
    },
    {
        "name": "NodeEntity",
        "inherits": "RefCounted",
        "methods": [
            {
                "name": "get_node",
                "return_value": {"type": "Node"},
                "flags": 1
            },
            {
                "name": "set_components",
                "arguments": [
                    {"name": "components", "type": "Array", "type_class": "Dictionary", "is_array": true}
                ],
                "return_value": {"type": "Array", "type_class": "StringName", "is_array": true},
                "flags": 1
            },
            {
                "name": "get_singleton",
                "return_value": {"type": "NodeEntity"},
                "flags": 33
            }
        ],
        "signals": [
            {
                "name": "component_changed",
                "arguments": [
                    {"name": "node_entity", "type": "NodeEntity"},
                    {"name": "component_class", "type": "StringName"}
                ]
            }
        ],
        "properties": [
            {"name": "node", "type": "Node", "usage": 6}
        ]
    }
]"#;

#[test]
fn parse_sample_dump() {
    let classes = parse_api_dump(SAMPLE_DUMP).unwrap();
    assert_eq!(classes.len(), 2);

    let entity = &classes[1];
    assert_eq!(entity.name, "NodeEntity");
    assert_eq!(entity.inherits, "RefCounted");
    assert_eq!(entity.host_type_name(), "NodeEntity");
    assert_eq!(entity.methods.len(), 3);
    assert_eq!(entity.signals.len(), 1);
    assert_eq!(entity.properties.len(), 1);
}

#[test]
fn method_flags_decode() {
    let classes = parse_api_dump(SAMPLE_DUMP).unwrap();
    let entity = &classes[1];

    let get_node = &entity.methods[0];
    assert!(!get_node.is_static());
    assert!(!get_node.is_virtual());
    assert!(!get_node.is_vararg());

    let get_singleton = &entity.methods[2];
    assert!(get_singleton.is_static());
    assert!(get_singleton.flags.contains(MethodFlags::NORMAL));
}

#[test]
fn array_params_carry_element_class() {
    let classes = parse_api_dump(SAMPLE_DUMP).unwrap();
    let set_components = &classes[1].methods[1];

    let arg = &set_components.arguments[0];
    assert!(arg.is_array);
    assert_eq!(arg.type_class, "Dictionary");

    let ret = &set_components.return_value;
    assert!(ret.is_array);
    assert_eq!(ret.type_class, "StringName");
    assert!(!ret.is_void());
}

#[test]
fn missing_return_value_is_void() {
    let classes = parse_api_dump(r#"[{"name": "A", "methods": [{"name": "go"}]}]"#).unwrap();
    let go = &classes[0].methods[0];
    assert!(go.return_value.is_void());
    assert!(go.arguments.is_empty());
}

#[test]
fn nil_type_name_is_void() {
    let classes =
        parse_api_dump(r#"[{"name": "A", "methods": [{"name": "go", "return_value": {"type": "Nil"}}]}]"#)
            .unwrap();
    assert!(classes[0].methods[0].return_value.is_void());
}

#[test]
fn host_name_overrides_native_name() {
    let classes = parse_api_dump(r#"[{"name": "node_entity_3d", "host_name": "NodeEntity3D"}]"#).unwrap();
    assert_eq!(classes[0].host_type_name(), "NodeEntity3D");
}

#[test]
fn property_usage_decode() {
    let classes = parse_api_dump(SAMPLE_DUMP).unwrap();
    let node = &classes[1].properties[0];
    assert!(node.usage.contains(PropertyUsage::STORAGE));
    assert!(node.usage.contains(PropertyUsage::EDITOR));
    assert!(!node.nil_is_variant());
}

#[test]
fn inheritance_map_keys_by_native_name() {
    let classes = parse_api_dump(SAMPLE_DUMP).unwrap();
    let map = inheritance_map(&classes);

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("NodeEntity"));
    assert!(map.contains_key("RefCounted"));
    assert!(!map.contains_key("Node"));
    assert_eq!(map["NodeEntity"].inherits, "RefCounted");

    // Dump order is preserved
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec!["RefCounted", "NodeEntity"]);
}
