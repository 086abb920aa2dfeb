//! Shared fixtures for generator tests.

use gdwrap_api::{ClassInfo, MethodFlags, MethodInfo, ParamInfo, PropertyUsage};

use crate::diagnostics::Diagnostics;
use crate::emit::{ClassEmitter, Config};
use crate::tables::Tables;
use crate::Error;

pub(crate) fn class(name: &str, inherits: &str) -> ClassInfo {
    ClassInfo {
        name: name.into(),
        inherits: inherits.into(),
        ..Default::default()
    }
}

/// Engine object classes present in every fixture run.
pub(crate) fn engine_classes() -> Vec<ClassInfo> {
    vec![
        class("Object", ""),
        class("RefCounted", "Object"),
        class("Node", "Object"),
    ]
}

pub(crate) fn builtins() -> Vec<String> {
    ["Object", "RefCounted", "Node"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn tables(classes: &[ClassInfo]) -> Tables<'_> {
    Tables::build(classes, builtins(), Tables::godot_sharp_names())
}

pub(crate) fn param(name: &str, type_name: &str) -> ParamInfo {
    ParamInfo {
        name: name.into(),
        type_name: type_name.into(),
        ..Default::default()
    }
}

pub(crate) fn array_param(name: &str, type_class: &str) -> ParamInfo {
    ParamInfo {
        name: name.into(),
        type_name: "Array".into(),
        type_class: type_class.into(),
        is_array: true,
        ..Default::default()
    }
}

pub(crate) fn enum_param(name: &str, type_name: &str) -> ParamInfo {
    ParamInfo {
        is_enum: true,
        ..param(name, type_name)
    }
}

/// A void slot carrying the nil-is-variant bit: the engine's encoding of a
/// Variant-typed value.
pub(crate) fn variant_param(name: &str) -> ParamInfo {
    ParamInfo {
        name: name.into(),
        usage: PropertyUsage::NIL_IS_VARIANT,
        ..Default::default()
    }
}

pub(crate) fn returns(type_name: &str) -> ParamInfo {
    param("", type_name)
}

pub(crate) fn method(name: &str, arguments: Vec<ParamInfo>, return_value: ParamInfo) -> MethodInfo {
    MethodInfo {
        name: name.into(),
        arguments,
        return_value,
        flags: MethodFlags::NORMAL,
    }
}

pub(crate) fn static_method(
    name: &str,
    arguments: Vec<ParamInfo>,
    return_value: ParamInfo,
) -> MethodInfo {
    MethodInfo {
        flags: MethodFlags::NORMAL | MethodFlags::STATIC,
        ..method(name, arguments, return_value)
    }
}

pub(crate) fn signal(name: &str, arguments: Vec<ParamInfo>) -> MethodInfo {
    MethodInfo {
        name: name.into(),
        arguments,
        ..Default::default()
    }
}

/// Emit one class from the fixture set, panicking on structural failure.
pub(crate) fn emit_one(classes: &[ClassInfo], target: &str) -> (String, Diagnostics) {
    try_emit_one(classes, target).unwrap()
}

pub(crate) fn try_emit_one(
    classes: &[ClassInfo],
    target: &str,
) -> Result<(String, Diagnostics), Error> {
    let tables = tables(classes);
    let config = Config::new();
    ClassEmitter::new(tables.class(target).unwrap(), &tables, &config).emit()
}

/// Assert that `needles` appear in `haystack`, in the given order.
pub(crate) fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut position = 0;
    for needle in needles {
        match haystack[position..].find(needle) {
            Some(offset) => position += offset + needle.len(),
            None => panic!("`{needle}` not found after byte {position} in:\n{haystack}"),
        }
    }
}
