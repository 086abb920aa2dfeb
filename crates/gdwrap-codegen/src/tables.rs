//! Per-run type and name resolution tables.
//!
//! Built once from the reflected metadata before any emission begins and
//! never mutated afterward, so a type's classification is stable across
//! the method and signal emitters within one run. A mismatch between the
//! two would produce code that compiles but mis-casts values at runtime.

use gdwrap_api::{ClassInfo, InheritanceMap, inheritance_map};
use indexmap::{IndexMap, IndexSet};

/// Immutable lookup tables for one generation run.
pub struct Tables<'a> {
    host_names: IndexMap<String, String>,
    builtins: IndexSet<String>,
    inheritance: InheritanceMap<'a>,
}

impl<'a> Tables<'a> {
    /// Build the tables from every known object-derived class.
    ///
    /// `classes` must contain engine classes as well as the extension
    /// classes this run wraps; a class absent from `builtins` is one the
    /// run emits a wrapper for.
    pub fn build(
        classes: &'a [ClassInfo],
        builtins: impl IntoIterator<Item = String>,
        host_names: IndexMap<String, String>,
    ) -> Self {
        Self {
            host_names,
            builtins: builtins.into_iter().collect(),
            inheritance: inheritance_map(classes),
        }
    }

    /// The default engine-name → C# name table for the GodotSharp runtime.
    ///
    /// Only non-identity mappings are listed; everything else passes
    /// through [`Tables::host_name`] unchanged.
    pub fn godot_sharp_names() -> IndexMap<String, String> {
        [
            ("int", "long"),
            ("float", "double"),
            ("String", "string"),
            ("PackedByteArray", "byte[]"),
            ("PackedInt32Array", "int[]"),
            ("PackedInt64Array", "long[]"),
            ("PackedFloat32Array", "float[]"),
            ("PackedFloat64Array", "double[]"),
            ("PackedStringArray", "string[]"),
            ("PackedVector2Array", "Vector2[]"),
            ("PackedVector3Array", "Vector3[]"),
            ("PackedColorArray", "Color[]"),
        ]
        .into_iter()
        .map(|(engine, host)| (engine.to_string(), host.to_string()))
        .collect()
    }

    /// The C# name for an engine type name.
    ///
    /// Unmapped names pass through verbatim: the table is an open world,
    /// not a validation gate.
    pub fn host_name<'s>(&'s self, engine_name: &'s str) -> &'s str {
        self.host_names
            .get(engine_name)
            .map(String::as_str)
            .unwrap_or(engine_name)
    }

    /// Whether `name` is a class compiled into the engine.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// Whether `name` is a wrapped polymorphic engine class.
    ///
    /// Inheritance-map membership is the sole signal; most emitter
    /// branching hangs off this one test.
    pub fn is_wrapped(&self, name: &str) -> bool {
        self.inheritance.contains_key(name)
    }

    /// Look up a wrapped class descriptor by native name.
    pub fn class(&self, name: &str) -> Option<&'a ClassInfo> {
        self.inheritance.get(name).copied()
    }

    /// Whether `name` is a class this run emits a wrapper for.
    ///
    /// Such classes carry their own static `Bind`, so rebinds can use the
    /// specific form instead of the generic helper.
    pub fn is_generated(&self, name: &str) -> bool {
        self.is_wrapped(name) && !self.is_builtin(name)
    }

    /// Classes this run emits wrappers for, in dump order.
    pub fn generated_classes(&self) -> impl Iterator<Item = &'a ClassInfo> + '_ {
        self.inheritance
            .values()
            .copied()
            .filter(|class| !self.builtins.contains(class.name.as_str()))
    }

    /// Nearest engine-builtin ancestor of a wrapped class, mapped to its
    /// C# name.
    ///
    /// This is both the base type of the emitted wrapper class and the
    /// narrowing-cast target for wrapped-class arguments: the wrapper's
    /// static type is a subtype the native side does not know about.
    /// Falls back to `GodotObject` when the chain dead-ends.
    pub fn engine_base_type<'s>(&'s self, class: &'s ClassInfo) -> &'s str {
        let mut current = class.inherits.as_str();
        while !current.is_empty() {
            if self.is_builtin(current) {
                return self.host_name(current);
            }
            match self.class(current) {
                Some(parent) => current = parent.inherits.as_str(),
                None => break,
            }
        }
        "GodotObject"
    }
}
