//! C# wrapper emission.
//!
//! One compilation unit per class: scaffolding (`GDExtensionName`,
//! `Instantiate`/`Bind`), property accessors, method trampolines, signal
//! subscription blocks, and the interned StringName trailer.

mod class;
mod context;
mod methods;
mod naming;
mod properties;
mod signals;

#[cfg(test)]
mod properties_tests;

pub use context::{ClassEmitter, Config, GeneratedClass, generate};
pub use naming::MemberRole;
pub use signals::{BusAction, ConnectionState, SubscriptionFsm};

/// Static helper class every generated unit calls into.
pub(crate) const STATIC_HELPER: &str = "GDExtensionHelper";
/// Conversion that rebinds a boxed object as a wrapper instance.
pub(crate) const BIND_METHOD: &str = "Bind";
/// Conversion that rebinds each element of a boxed object array.
pub(crate) const CAST_METHOD: &str = "Cast";

/// Indentation steps matching the emitted C# nesting depth.
pub(crate) const TAB1: &str = "    ";
pub(crate) const TAB2: &str = "        ";
pub(crate) const TAB3: &str = "            ";
pub(crate) const TAB4: &str = "                ";
