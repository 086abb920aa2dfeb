//! Method wrapper emission.
//!
//! Each method becomes one expression-bodied accessor: static methods
//! dispatch through the helper's class-keyed singleton cache, instance
//! methods through the wrapper's own native handle, and both reference the
//! member by its interned StringName.

use gdwrap_api::{MethodInfo, ParamInfo};
use gdwrap_core::utils::{escape_reserved, to_camel_case};

use crate::classify::{ArgPassing, ReturnUnwrap, classify_argument, classify_return, host_type};
use crate::diagnostics::DiagnosticKind;

use super::context::ClassEmitter;
use super::naming::MemberRole;
use super::{BIND_METHOD, CAST_METHOD, STATIC_HELPER, TAB1};

impl ClassEmitter<'_> {
    pub(super) fn emit_methods(&mut self) -> Result<(), crate::Error> {
        let class = self.class;
        if class.methods.is_empty() {
            return Ok(());
        }
        self.begin_region("Methods");
        for method in &class.methods {
            self.emit_method(method)?;
        }
        self.end_region();
        Ok(())
    }

    fn emit_method(&mut self, method: &MethodInfo) -> Result<(), crate::Error> {
        if method.name.is_empty() {
            self.diagnostics
                .report(
                    DiagnosticKind::MissingNativeName,
                    self.class.host_type_name(),
                    "<method>",
                )
                .emit();
            return Ok(());
        }

        let name = self.claim_name(&method.name, MemberRole::Method)?;
        let cached = self.intern_native_name(&method.name);

        if method.is_vararg() {
            self.diagnostics
                .report(
                    DiagnosticKind::VarargNotSupported,
                    self.class.host_type_name(),
                    &method.name,
                )
                .emit();
            self.output.push_str(&format!(
                "{TAB1}// vararg: only the declared arguments of `{}` are forwarded\n",
                method.name
            ));
        }
        if method.is_virtual() {
            self.diagnostics
                .report(
                    DiagnosticKind::VirtualCallNotScripted,
                    self.class.host_type_name(),
                    &method.name,
                )
                .emit();
        }

        let ret_host = host_type(&method.return_value, self.tables);
        let signature_args = self.signature_arguments(&method.arguments);

        let mut call_args = String::new();
        for argument in &method.arguments {
            call_args.push_str(", ");
            call_args.push_str(&self.call_argument(argument));
        }

        let dispatch = if method.is_static() {
            format!("{STATIC_HELPER}.Call(GDExtensionName, {cached}{call_args})")
        } else {
            format!("Call({cached}{call_args})")
        };

        let expr = match classify_return(&method.return_value, self.tables) {
            ReturnUnwrap::Void => dispatch,
            ReturnUnwrap::Rebind {
                class_name,
                specific,
            } => {
                let boxed = format!("{dispatch}.As<GodotObject>()");
                if specific {
                    format!("{class_name}.{BIND_METHOD}({boxed})")
                } else {
                    format!("{STATIC_HELPER}.{BIND_METHOD}<{class_name}>({boxed})")
                }
            }
            // Outer array conversion wraps the inner per-element rebind:
            // the call unboxes to an array of boxes first, then each
            // element is rebound independently.
            ReturnUnwrap::ElementRebind { element } => format!(
                "{STATIC_HELPER}.{CAST_METHOD}<{element}>({dispatch}.As<Array<GodotObject>>())"
            ),
            ReturnUnwrap::Unbox { host } => format!("{dispatch}.As<{host}>()"),
        };

        let qualifier = if method.is_static() { "static " } else { "" };
        self.output.push_str(&format!(
            "{TAB1}public {qualifier}{ret_host} {name}({signature_args}) => {expr};\n\n"
        ));
        Ok(())
    }

    /// Typed parameter list for a member signature, in declaration order.
    pub(super) fn signature_arguments(&self, arguments: &[ParamInfo]) -> String {
        arguments
            .iter()
            .map(|argument| {
                format!(
                    "{} {}",
                    host_type(argument, self.tables),
                    escape_reserved(&to_camel_case(&argument.name))
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One call-site argument, transformed for the send direction.
    fn call_argument(&self, argument: &ParamInfo) -> String {
        let name = escape_reserved(&to_camel_case(&argument.name));
        match classify_argument(argument, self.tables) {
            ArgPassing::Plain => name,
            ArgPassing::NilCoalesced => format!("{name} ?? new Variant()"),
            ArgPassing::EnumBoxed => {
                format!("Variant.From<{}>({name})", host_type(argument, self.tables))
            }
            ArgPassing::NarrowCast { base } => format!("({base}){name}"),
        }
    }
}
