//! Argument and return classification.
//!
//! Pure functions over a parameter descriptor and the run tables. Both
//! emitters route every parameter and return slot through here, so the two
//! can never disagree about a type's handling.
//!
//! The axes are: array, enum, wrapped-class (inheritance-map membership),
//! and nil-accepted. Nil acceptance manifests in the metadata as a void
//! slot carrying the nil-is-variant usage bit.

use gdwrap_api::ParamInfo;

use crate::tables::Tables;

/// How a method argument is passed across the native boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgPassing {
    /// Pass the host value through unchanged.
    Plain,
    /// Nil is a valid value: substitute an empty box when the host value
    /// is absent.
    NilCoalesced,
    /// Box through the enum-aware constructor; enums are not raw integers
    /// to the native side.
    EnumBoxed,
    /// Narrow the wrapper down to its engine base type before sending.
    /// The wrapper's static host type is a subtype the native side does
    /// not know about.
    NarrowCast { base: String },
}

/// How a method return value is unwrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnUnwrap {
    Void,
    /// Declared class is wrapped: rebind the boxed object as the most
    /// specific known wrapper. `specific` selects the wrapper's own static
    /// `Bind` over the generic helper.
    Rebind { class_name: String, specific: bool },
    /// Array of wrapped elements: rebind each element, not the array.
    ElementRebind { element: String },
    /// Unbox as the declared host type. Covers value types and arrays of
    /// value elements, which pass through whole.
    Unbox { host: String },
}

/// How a signal trampoline converts one received argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalRecv {
    /// Rebind the received object as its wrapper type.
    Rebind { class_name: String },
    /// Rebind each element of a received array of wrapped objects.
    ElementRebind { element: String },
    /// Value types arrive fully typed already.
    Passthrough,
}

/// Classify a method argument for the send direction.
///
/// Wrapped-class narrowing takes precedence; a wrapped argument is never
/// also nil-coalesced or enum-boxed. An engine-builtin class is already
/// its own native base type, so only extension classes are narrowed.
pub fn classify_argument(param: &ParamInfo, tables: &Tables) -> ArgPassing {
    if !param.is_array
        && let Some(class) = tables.class(&param.type_name)
        && !tables.is_builtin(&class.name)
    {
        return ArgPassing::NarrowCast {
            base: tables.engine_base_type(class).to_string(),
        };
    }
    if param.is_void() && param.nil_is_variant() {
        return ArgPassing::NilCoalesced;
    }
    if param.is_enum {
        return ArgPassing::EnumBoxed;
    }
    ArgPassing::Plain
}

/// Classify a return slot for unwrapping.
///
/// Wrapped-class membership is checked before the generic unbox so the
/// most-derived wrapper type is never lost to the declared static type.
pub fn classify_return(ret: &ParamInfo, tables: &Tables) -> ReturnUnwrap {
    if ret.is_void() {
        return ReturnUnwrap::Void;
    }
    if !ret.is_array
        && let Some(class) = tables.class(&ret.type_name)
    {
        return ReturnUnwrap::Rebind {
            class_name: class.host_type_name().to_string(),
            specific: tables.is_generated(&class.name),
        };
    }
    if ret.is_array && tables.is_wrapped(&ret.type_class) {
        return ReturnUnwrap::ElementRebind {
            element: element_host(&ret.type_class, tables),
        };
    }
    ReturnUnwrap::Unbox {
        host: host_type(ret, tables),
    }
}

/// Classify a signal argument for the receive direction.
///
/// Same table as method arguments, opposite direction: values are arriving
/// from the native side, so wrapped objects are rebound rather than
/// narrowed.
pub fn classify_signal_argument(param: &ParamInfo, tables: &Tables) -> SignalRecv {
    if !param.is_array
        && let Some(class) = tables.class(&param.type_name)
    {
        return SignalRecv::Rebind {
            class_name: class.host_type_name().to_string(),
        };
    }
    if param.is_array && tables.is_wrapped(&param.type_class) {
        return SignalRecv::ElementRebind {
            element: element_host(&param.type_class, tables),
        };
    }
    SignalRecv::Passthrough
}

/// The C#-facing type for a parameter, return slot, or property.
pub fn host_type(param: &ParamInfo, tables: &Tables) -> String {
    if param.is_array {
        if param.type_class.is_empty() {
            "Array".to_string()
        } else {
            format!("Array<{}>", element_host(&param.type_class, tables))
        }
    } else if param.is_void() {
        if param.nil_is_variant() {
            "Variant".to_string()
        } else {
            "void".to_string()
        }
    } else {
        match tables.class(&param.type_name) {
            Some(class) => class.host_type_name().to_string(),
            None => tables.host_name(&param.type_name).to_string(),
        }
    }
}

/// The C#-facing name for an array element type.
fn element_host(name: &str, tables: &Tables) -> String {
    match tables.class(name) {
        Some(class) => class.host_type_name().to_string(),
        None => tables.host_name(name).to_string(),
    }
}
