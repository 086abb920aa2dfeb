#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reflected class metadata for gdwrap.
//!
//! This crate is the boundary with the engine's introspection service: a
//! 1:1 serde mapping of the JSON class dump (`ClassInfo`, `MethodInfo`,
//! `ParamInfo` and their flag words), plus the inheritance-map builder the
//! generator classifies types against.
//!
//! Descriptors are read-only for the duration of a generation run; nothing
//! in this crate mutates after deserialization.

mod class;
mod flags;

#[cfg(test)]
mod class_tests;

pub use class::{ClassInfo, InheritanceMap, MethodInfo, ParamInfo, inheritance_map};
pub use flags::{MethodFlags, PropertyUsage};

/// Parse a JSON class dump produced by the engine introspection service.
pub fn parse_api_dump(json: &str) -> Result<Vec<ClassInfo>, serde_json::Error> {
    serde_json::from_str(json)
}
