//! Class, method, and parameter descriptors.

use indexmap::IndexMap;

use crate::flags::{MethodFlags, PropertyUsage};

/// One reflected class: identity, base-class reference, and members.
///
/// `name` is the identifier the native runtime knows the class by;
/// `host_name` is the C#-facing type name and defaults to `name` when the
/// dump does not rename it.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub inherits: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
    #[serde(default)]
    pub signals: Vec<MethodInfo>,
    #[serde(default)]
    pub properties: Vec<ParamInfo>,
}

impl ClassInfo {
    /// The C#-facing type name for this class.
    pub fn host_type_name(&self) -> &str {
        if self.host_name.is_empty() {
            &self.name
        } else {
            &self.host_name
        }
    }
}

/// One reflected method or signal.
///
/// Signals reuse this shape with a void `return_value` and default flags.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MethodInfo {
    /// Native member name. May be empty in malformed dumps; emission skips
    /// such members with a diagnostic.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ParamInfo>,
    #[serde(default)]
    pub return_value: ParamInfo,
    #[serde(default)]
    pub flags: MethodFlags,
}

impl MethodInfo {
    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    pub fn is_virtual(&self) -> bool {
        self.flags.contains(MethodFlags::VIRTUAL)
    }

    pub fn is_vararg(&self) -> bool {
        self.flags.contains(MethodFlags::VARARG)
    }
}

/// One reflected parameter, return slot, or property.
///
/// The four classification axes the emitters branch on are all here:
/// `is_array`, `is_enum`, the declared class name (`type_name`, tested
/// against the inheritance map), and nil-accepted usage.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ParamInfo {
    #[serde(default)]
    pub name: String,
    /// Declared engine type name. Empty or `Nil` means void.
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Element type name when `is_array` is set.
    #[serde(default)]
    pub type_class: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub usage: PropertyUsage,
}

impl ParamInfo {
    pub fn is_void(&self) -> bool {
        self.type_name.is_empty() || self.type_name == "Nil"
    }

    /// Whether the engine accepts nil as a valid value for this slot.
    pub fn nil_is_variant(&self) -> bool {
        self.usage.contains(PropertyUsage::NIL_IS_VARIANT)
    }
}

/// Native class name → descriptor, in dump order.
pub type InheritanceMap<'a> = IndexMap<&'a str, &'a ClassInfo>;

/// Build the inheritance map for a class set.
///
/// Membership in this map is the polymorphic-capability test the emitters
/// rely on: a type name found here is a wrapped engine class, anything else
/// is a value type or an unwrapped native object.
pub fn inheritance_map(classes: &[ClassInfo]) -> InheritanceMap<'_> {
    classes.iter().map(|c| (c.name.as_str(), c)).collect()
}
